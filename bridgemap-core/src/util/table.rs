use bridgemap_entities::table::{Header, Row};

pub const FIELD_DELIMITER: char = ',';
pub const LINE_DELIMITER: char = '\n';

/// Splits a single line into its fields.
///
/// There is no support for quoting or escaping. A trailing
/// carriage return is dropped.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.strip_suffix('\r')
        .unwrap_or(line)
        .split(FIELD_DELIMITER)
}

/// Splits delimited text into the header and the data rows.
///
/// Returns `None` if the text does not contain at least one
/// line besides the header. Rows are neither filtered nor validated.
pub fn split_table(text: &str) -> Option<(Header, impl Iterator<Item = Row> + '_)> {
    let mut lines = text.split(LINE_DELIMITER);
    let header_line = lines.next()?;
    let mut lines = lines.peekable();
    lines.peek()?;
    let header = split_fields(header_line).collect::<Header>();
    let rows = lines.map(|line| split_fields(line).collect::<Row>());
    Some((header, rows))
}
