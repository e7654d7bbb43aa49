use super::prelude::*;
use crate::view::bridge_legend;

pub fn add_legend<M: MapSurface>(map: &mut M) {
    map.add_layer(Layer::Legend(bridge_legend()));
}
