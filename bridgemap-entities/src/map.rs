use crate::{geo::MapPoint, marker::Marker};

pub type Zoom = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: Zoom,
}

/// A named provider of raster map tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLayer {
    pub name: String,
    /// URL template with `{s}`, `{x}`, `{y}` and `{z}` placeholders
    pub url_template: String,
    pub max_zoom: Zoom,
    pub subdomains: Vec<String>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    /// Diameter of the symbol in pixels
    pub diameter: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub title: String,
    pub position: ControlPosition,
    pub entries: Vec<LegendEntry>,
}

/// Something that can be drawn on top of the map canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Tiles { layer: BaseLayer, active: bool },
    Marker(Marker),
    Legend(Legend),
}

/// Interactive widgets the map offers besides its layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Switch between the base layers with the given names
    Layers(Vec<String>),
    Scale,
}
