use crate::{geo::MapPoint, table::Row};

/// A bridge located on the map.
///
/// Only lives for the time it takes to turn it into a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeRecord {
    pub pos: MapPoint,
    pub row: Row,
}
