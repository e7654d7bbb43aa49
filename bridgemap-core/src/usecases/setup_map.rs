use super::prelude::*;
use crate::view::{base_layers, default_view};

/// Prepares an empty map: initial view, base layers and controls.
pub fn setup_map<M: MapSurface>(map: &mut M) {
    map.set_view(default_view());
    let layers = base_layers();
    let names = layers.iter().map(|l| l.name.clone()).collect();
    for (index, layer) in layers.into_iter().enumerate() {
        log::debug!("Register base layer '{}'", layer.name);
        map.add_layer(Layer::Tiles {
            layer,
            active: index == 0,
        });
    }
    map.add_control(Control::Layers(names));
    map.add_control(Control::Scale);
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockMap, *};

    #[test]
    fn setup_empty_map() {
        let mut map = MockMap::default();
        setup_map(&mut map);

        assert_eq!(map.views, vec![default_view()]);
        assert_eq!(map.layers.len(), 4);
        assert!(map.markers().is_empty());

        let active = map
            .layers
            .iter()
            .filter_map(|l| match l {
                Layer::Tiles { layer, active: true } => Some(layer.name.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(active, ["OpenStreetMap"]);

        assert_eq!(
            map.controls,
            vec![
                Control::Layers(vec![
                    "OpenStreetMap".to_string(),
                    "Google Hybrid".to_string(),
                    "Google Satellite".to_string(),
                    "Google Terrain".to_string(),
                ]),
                Control::Scale,
            ]
        );
    }
}
