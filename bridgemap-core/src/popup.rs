use std::fmt::Write;

use bridgemap_entities::{
    marker::{Popup, PopupEntry},
    table::{Header, Row},
};
use maud::html;

pub const POPUP_TITLE: &str = "Bridge Details";

/// Columns that only identify or locate a record
/// and are therefore never shown to the user.
pub const EXCLUDED_COLUMNS: [&str; 4] = ["X", "Y", "OBJECTID", "BRIDGE_ID"];

pub fn is_excluded_column(column: &str) -> bool {
    EXCLUDED_COLUMNS.contains(&column)
}

/// Pairs every displayable column with the field at the same position.
///
/// Fields without a matching column are ignored.
pub fn build_popup(header: &Header, row: &Row) -> Popup {
    let entries = header
        .columns()
        .iter()
        .zip(row.fields())
        .filter(|(column, _)| !is_excluded_column(column))
        .map(|(column, value)| PopupEntry {
            column: column.clone(),
            value: value.clone(),
        })
        .collect();
    Popup {
        title: POPUP_TITLE.to_owned(),
        entries,
    }
}

pub fn render_text(popup: &Popup) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", popup.title);
    for PopupEntry { column, value } in &popup.entries {
        let _ = writeln!(text, "{column}: {value}");
    }
    text
}

pub fn render_html(popup: &Popup) -> String {
    html! {
        div style="font-family: Arial, sans-serif; padding: 8px;" {
            h4 style="margin: 0;" { (popup.title) }
            hr style="margin: 5px 0;";
            @for entry in &popup.entries {
                b { (entry.column) ":" } " " (entry.value) br;
            }
        }
    }
    .into_string()
}
