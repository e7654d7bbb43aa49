use bridgemap_entities::{
    geo::{CoordRangeError, MapPoint},
    planar::PlanarPoint,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The projection engine failed: {0}")]
    Engine(String),
    #[error(transparent)]
    Range(#[from] CoordRangeError),
}

/// Transforms planar coordinates of a fixed source reference system
/// into geographic coordinates of a fixed target reference system.
///
/// Implementations must be deterministic: the same input always
/// yields the same output.
pub trait Reprojector {
    fn reproject(&self, pt: PlanarPoint) -> Result<MapPoint, Error>;
}

impl<T> Reprojector for &T
where
    T: Reprojector + ?Sized,
{
    fn reproject(&self, pt: PlanarPoint) -> Result<MapPoint, Error> {
        (**self).reproject(pt)
    }
}
