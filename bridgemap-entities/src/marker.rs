use crate::geo::MapPoint;

/// Fixed appearance of a circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Radius in screen pixels
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Small, solid brown dot.
    pub const BRIDGE: Self = Self {
        radius: 3.0,
        color: "brown",
        fill_color: "brown",
        fill_opacity: 1.0,
    };
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::BRIDGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupEntry {
    pub column: String,
    pub value: String,
}

/// Attribute values shown when a marker is clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub entries: Vec<PopupEntry>,
}

impl Popup {
    pub fn value(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.column == column)
            .map(|e| e.value.as_str())
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.entries.iter().any(|e| e.column == column)
    }
}

/// A point graphic with an attached popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub style: MarkerStyle,
    pub popup: Popup,
}
