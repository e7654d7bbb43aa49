//! Initial map setup: where to look at and what to show underneath.

use bridgemap_entities::{
    geo::MapPoint,
    map::{BaseLayer, ControlPosition, Legend, LegendEntry, MapView, Zoom},
    marker::MarkerStyle,
};

/// Center of South Dakota
pub const DEFAULT_CENTER_LAT_DEG: f64 = 44.5;
pub const DEFAULT_CENTER_LNG_DEG: f64 = -100.0;
pub const DEFAULT_ZOOM: Zoom = 7;

const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";
const OSM_MAX_ZOOM: Zoom = 19;

const GOOGLE_MAX_ZOOM: Zoom = 20;
const GOOGLE_SUBDOMAINS: [&str; 4] = ["mt0", "mt1", "mt2", "mt3"];

const LEGEND_TITLE: &str = "Legend";
const LEGEND_LABEL: &str = "Bridges";
const LEGEND_SYMBOL_DIAMETER: u16 = 16;

pub fn default_view() -> MapView {
    MapView {
        center: MapPoint::from_lat_lng_deg(DEFAULT_CENTER_LAT_DEG, DEFAULT_CENTER_LNG_DEG),
        zoom: DEFAULT_ZOOM,
    }
}

fn google_layer(name: &str, lyrs: &str) -> BaseLayer {
    BaseLayer {
        name: name.to_owned(),
        url_template: format!("http://{{s}}.google.com/vt?lyrs={lyrs}&x={{x}}&y={{y}}&z={{z}}"),
        max_zoom: GOOGLE_MAX_ZOOM,
        subdomains: GOOGLE_SUBDOMAINS.map(ToOwned::to_owned).to_vec(),
        attribution: None,
    }
}

/// All selectable base layers.
///
/// The first one is shown initially.
pub fn base_layers() -> Vec<BaseLayer> {
    vec![
        BaseLayer {
            name: "OpenStreetMap".to_owned(),
            url_template: OSM_TILE_URL.to_owned(),
            max_zoom: OSM_MAX_ZOOM,
            subdomains: vec![],
            attribution: Some(OSM_ATTRIBUTION.to_owned()),
        },
        google_layer("Google Hybrid", "s,h"),
        google_layer("Google Satellite", "s"),
        google_layer("Google Terrain", "p"),
    ]
}

pub fn bridge_legend() -> Legend {
    Legend {
        title: LEGEND_TITLE.to_owned(),
        position: ControlPosition::BottomRight,
        entries: vec![LegendEntry {
            label: LEGEND_LABEL.to_owned(),
            color: MarkerStyle::BRIDGE.fill_color.to_owned(),
            diameter: LEGEND_SYMBOL_DIAMETER,
        }],
    }
}
