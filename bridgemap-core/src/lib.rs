pub mod gateways;
pub mod map;
pub mod popup;
pub mod projection;
pub mod usecases;
pub mod util;
pub mod view;

pub mod entities {
    pub use bridgemap_entities::{bridge::*, geo::*, map::*, marker::*, planar::*, table::*};
}
