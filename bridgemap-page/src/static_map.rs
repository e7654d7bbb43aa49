use bridgemap_boundary as json;
use bridgemap_core::{map::MapSurface, popup::render_html};
use bridgemap_entities::map::{Control, Layer, MapView};

/// Records everything that is put on the map so that
/// it can be replayed later by a browser.
#[derive(Debug, Default)]
pub struct StaticMap {
    config: json::MapConfig,
}

impl StaticMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &json::MapConfig {
        &self.config
    }

    pub fn into_config(self) -> json::MapConfig {
        self.config
    }
}

impl MapSurface for StaticMap {
    fn add_layer(&mut self, layer: Layer) {
        match layer {
            Layer::Tiles { layer, active } => {
                self.config
                    .tile_layers
                    .push(json::TileLayer::new(layer, active));
            }
            Layer::Marker(marker) => {
                let popup = render_html(&marker.popup);
                self.config.markers.push(json::CircleMarker {
                    pos: marker.pos.into(),
                    style: marker.style.into(),
                    popup,
                });
            }
            Layer::Legend(legend) => {
                if self.config.legend.is_some() {
                    log::warn!("Replacing the existing legend");
                }
                self.config.legend = Some(legend.into());
            }
        }
    }

    fn add_control(&mut self, control: Control) {
        match control {
            Control::Layers(names) => {
                self.config.layer_switch = Some(names);
            }
            Control::Scale => {
                self.config.scale = true;
            }
        }
    }

    fn set_view(&mut self, view: MapView) {
        self.config.view = Some(view.into());
    }
}

#[cfg(test)]
mod tests {
    use bridgemap_core::{
        gateways::reproject,
        map::MarkerLayer,
        usecases::{plot_bridges, reset_view, setup_map},
    };
    use bridgemap_entities::{
        geo::MapPoint, map::ControlPosition, planar::PlanarPoint,
    };

    use super::*;

    struct Shift;

    impl reproject::Reprojector for Shift {
        fn reproject(&self, pt: PlanarPoint) -> Result<MapPoint, reproject::Error> {
            Ok(MapPoint::try_from_lat_lng_deg(
                43.0 + pt.y / 1e6,
                -100.0 + pt.x / 1e6,
            )?)
        }
    }

    #[test]
    fn record_setup() {
        let mut map = StaticMap::new();
        setup_map(&mut map);
        let config = map.config();
        assert_eq!(config.tile_layers.len(), 4);
        assert_eq!(
            config.tile_layers.iter().filter(|l| l.active).count(),
            1
        );
        assert_eq!(config.layer_switch.as_ref().map(Vec::len), Some(4));
        assert!(config.scale);
        let view = config.view.unwrap();
        assert_eq!(view.zoom, 7);
        assert!((view.center.lat - 44.5).abs() < 1e-6);
        assert!(config.markers.is_empty());
        assert!(config.legend.is_none());
    }

    #[test]
    fn record_markers_and_legend() {
        let mut map = StaticMap::new();
        let mut layer = MarkerLayer::new();
        setup_map(&mut map);
        plot_bridges(
            &mut map,
            &Shift,
            &mut layer,
            "X,Y,NAME\n1000000,500000,Foo\n5,x,Bar\n",
        );
        let config = map.into_config();
        assert_eq!(config.markers.len(), 1);
        let marker = &config.markers[0];
        assert!((marker.pos.lat - 43.5).abs() < 1e-6);
        assert!((marker.pos.lng + 99.0).abs() < 1e-6);
        assert_eq!(marker.style.color, "brown");
        assert!(marker.popup.contains("<b>NAME:</b> Foo"));
        let legend = config.legend.unwrap();
        assert_eq!(legend.title, "Legend");
        assert_eq!(legend.position, ControlPosition::BottomRight.as_str());
    }

    #[test]
    fn reset_replaces_view() {
        let mut map = StaticMap::new();
        map.set_view(MapView {
            center: MapPoint::from_lat_lng_deg(0.0, 0.0),
            zoom: 2,
        });
        reset_view(&mut map);
        assert_eq!(map.config().view.unwrap().zoom, 7);
    }
}
