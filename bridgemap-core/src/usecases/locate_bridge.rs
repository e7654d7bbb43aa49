use thiserror::Error;

use super::prelude::*;
use crate::{popup::build_popup, util::parse::parse_coordinate};

/// Why a data row did not result in a marker.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("expected at least {expected} fields but found {found}")]
    ShortRow { expected: usize, found: usize },
    #[error("the coordinates are not numeric")]
    NotANumber,
    #[error(transparent)]
    Unprojectable(#[from] reproject::Error),
}

/// Reads the planar position from the first two fields of a row
/// and projects it onto the map.
pub fn locate_bridge<R>(reprojector: &R, header: &Header, row: Row) -> Result<BridgeRecord, SkipReason>
where
    R: Reprojector,
{
    if row.len() < header.len() {
        return Err(SkipReason::ShortRow {
            expected: header.len(),
            found: row.len(),
        });
    }
    let x = row.field(0).and_then(parse_coordinate);
    let y = row.field(1).and_then(parse_coordinate);
    let (Some(x), Some(y)) = (x, y) else {
        return Err(SkipReason::NotANumber);
    };
    let pos = reprojector.reproject(PlanarPoint::new(x, y))?;
    Ok(BridgeRecord { pos, row })
}

pub fn bridge_marker(header: &Header, bridge: &BridgeRecord) -> Marker {
    Marker {
        pos: bridge.pos,
        style: MarkerStyle::BRIDGE,
        popup: build_popup(header, &bridge.row),
    }
}
