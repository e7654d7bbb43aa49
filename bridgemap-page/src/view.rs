use bridgemap_boundary::MapConfig;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_CSS_SHA256: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_JS_SHA256: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";

const MAP_JS: &str = include_str!("map.js");

const MAIN_CSS: &str = r#"
html, body { height: 100%; margin: 0; }
body { display: flex; flex-direction: column; font-family: Arial, sans-serif; }
nav { background: #343a40; padding: 8px 16px; }
#navbar-brand { color: #fff; font-size: 1.25rem; text-decoration: none; cursor: pointer; }
#map { flex: 1; }
.legend { background: #fff; padding: 6px 8px; border-radius: 5px; box-shadow: 0 0 15px rgba(0,0,0,0.2); line-height: 18px; }
.legend h4 { margin: 0 0 5px; }
.legend i { float: left; margin-right: 8px; border-radius: 50%; opacity: 1; }
"#;

pub const DEFAULT_TITLE: &str = "South Dakota Bridges";

fn page(title: &str, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                (head)
            }
            body {
                (body)
            }
        }
    }
}

fn leaflet_css_link() -> Markup {
    html! {
        link
            rel="stylesheet"
            href=(LEAFLET_CSS_URL)
            integrity=(LEAFLET_CSS_SHA256)
            crossorigin="";
    }
}

/// Serializes the config as a JavaScript expression that is
/// safe to embed into a `script` element.
fn config_script(config: &MapConfig) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(config)?.replace("</", "<\\/");
    Ok(format!("window.BRIDGEMAP_CONFIG={json};"))
}

fn map_scripts(config: &MapConfig) -> Result<Markup, serde_json::Error> {
    let config = config_script(config)?;
    Ok(html! {
        script { (PreEscaped(config)) }
        script
            src=(LEAFLET_JS_URL)
            integrity=(LEAFLET_JS_SHA256)
            crossorigin="" {}
        script { (PreEscaped(MAP_JS)) }
    })
}

/// A complete page showing the map with a navbar on top.
pub fn map_page(title: &str, config: &MapConfig) -> Result<Markup, serde_json::Error> {
    let scripts = map_scripts(config)?;
    Ok(page(
        title,
        html! {
            (leaflet_css_link())
            style { (PreEscaped(MAIN_CSS)) }
        },
        html! {
            nav {
                a id="navbar-brand" href="#" { (title) }
            }
            div id="map" {}
            (scripts)
        },
    ))
}
