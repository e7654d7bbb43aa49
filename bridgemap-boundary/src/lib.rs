use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::popup_properties;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub pos: Coordinate,
    pub style: MarkerStyle,
    /// Pre-rendered HTML
    pub popup: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: String,
    pub url_template: String,
    pub max_zoom: u8,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subdomains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub diameter: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub title: String,
    pub position: String,
    pub entries: Vec<LegendEntry>,
}

/// Everything a browser needs to draw the map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<MapView>,
    pub tile_layers: Vec<TileLayer>,
    /// Names of the tile layers offered in the layer switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_switch: Option<Vec<String>>,
    pub scale: bool,
    pub markers: Vec<CircleMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

// ---- GeoJSON (RFC 7946) ---- //

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// `[longitude, latitude]`
    Point { coordinates: [f64; 2] },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}
