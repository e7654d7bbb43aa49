use super::prelude::*;
use crate::view::default_view;

pub fn reset_view<M: MapSurface>(map: &mut M) {
    map.set_view(default_view());
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockMap, *};

    #[test]
    fn reset_to_south_dakota() {
        let mut map = MockMap::default();
        map.set_view(MapView {
            center: MapPoint::from_lat_lng_deg(10.0, 10.0),
            zoom: 3,
        });
        reset_view(&mut map);
        assert_eq!(map.views.len(), 2);
        assert_eq!(map.views.last(), Some(&default_view()));
    }
}
