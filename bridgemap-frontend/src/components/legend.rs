use bridgemap_entities::map::{Legend, LegendEntry};
use leptos::*;

fn symbol_style(entry: &LegendEntry) -> String {
    let LegendEntry {
        color, diameter, ..
    } = entry;
    format!("background: {color}; width: {diameter}px; height: {diameter}px;")
}

#[component]
pub fn MapLegend(legend: ReadSignal<Option<Legend>>) -> impl IntoView {
    move || {
        legend.get().map(|legend| {
            let class = format!("legend legend-{}", legend.position.as_str());
            view! {
              <div class=class>
                <h4>{legend.title}</h4>
                {legend
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let style = symbol_style(&entry);
                        view! {
                          <div>
                            <i style=style></i>
                            {entry.label}
                          </div>
                        }
                    })
                    .collect_view()}
              </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_symbol_of_fixed_size() {
        let entry = LegendEntry {
            label: "Bridges".into(),
            color: "brown".into(),
            diameter: 16,
        };
        assert_eq!(
            symbol_style(&entry),
            "background: brown; width: 16px; height: 16px;"
        );
    }
}
