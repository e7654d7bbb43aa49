use bridgemap_entities::{
    geo::MapBbox,
    map::{Control, Layer, MapView},
    marker::Marker,
    table::Row,
};

/// The parts of an interactive map the use cases rely on.
pub trait MapSurface {
    fn add_layer(&mut self, layer: Layer);
    fn add_control(&mut self, control: Control);
    fn set_view(&mut self, view: MapView);
}

impl<T> MapSurface for &mut T
where
    T: MapSurface + ?Sized,
{
    fn add_layer(&mut self, layer: Layer) {
        (**self).add_layer(layer);
    }
    fn add_control(&mut self, control: Control) {
        (**self).add_control(control);
    }
    fn set_view(&mut self, view: MapView) {
        (**self).set_view(view);
    }
}

/// A marker that has been put on the map together with the
/// raw data it was created from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub marker: Marker,
    pub row: Row,
}

/// Keeps track of all markers that have been placed on a map.
///
/// Markers are only ever appended.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    placed: Vec<PlacedMarker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, marker: Marker, row: Row) {
        self.placed.push(PlacedMarker { marker, row });
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.placed
    }

    pub fn bbox(&self) -> Option<MapBbox> {
        MapBbox::enclosing(self.placed.iter().map(|p| p.marker.pos))
    }
}
