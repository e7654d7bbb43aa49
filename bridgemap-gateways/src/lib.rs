//! Implementations of the gateways defined in `bridgemap-core`.

pub mod proj4;
#[cfg(feature = "source")]
pub mod source;
