use bridgemap_core::{map::MapSurface, popup::render_html};
use bridgemap_entities::{
    map::{BaseLayer, Control, Layer, Legend, MapView},
    marker::Marker,
};
use js_sys::Array;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::leaflet::{self, Options};

/// A Leaflet map bound to a DOM element.
///
/// The legend is not a Leaflet control but
/// a component that reads the `legend` signal.
pub struct LeafletMap {
    map: leaflet::Map,
    base_layers: Vec<(String, leaflet::Layer)>,
    legend: WriteSignal<Option<Legend>>,
}

impl LeafletMap {
    pub fn new(container: &web_sys::HtmlElement, legend: WriteSignal<Option<Legend>>) -> Self {
        log::debug!("Create leaflet map");
        Self {
            map: leaflet::new_map(container),
            base_layers: vec![],
            legend,
        }
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }

    fn add_tiles(&mut self, layer: BaseLayer, active: bool) {
        let BaseLayer {
            name,
            url_template,
            max_zoom,
            subdomains,
            attribution,
        } = layer;
        let mut options = Options::new().set("maxZoom", max_zoom);
        if !subdomains.is_empty() {
            let subdomains: Array = subdomains.iter().map(|s| JsValue::from_str(s)).collect();
            options = options.set("subdomains", subdomains);
        }
        if let Some(attribution) = attribution {
            options = options.set("attribution", attribution);
        }
        let tiles = leaflet::tile_layer(&url_template, &options.into_object());
        if active {
            tiles.add_to(&self.map);
        }
        self.base_layers.push((name, tiles));
    }

    fn add_marker(&self, marker: &Marker) {
        let (lat, lng) = marker.pos.to_lat_lng_deg();
        let style = marker.style;
        let options = Options::new()
            .set("radius", style.radius)
            .set("color", style.color)
            .set("fillColor", style.fill_color)
            .set("fillOpacity", style.fill_opacity);
        leaflet::circle_marker(&leaflet::lat_lng(lat, lng), &options.into_object())
            .bind_popup(&render_html(&marker.popup))
            .add_to(&self.map);
    }
}

impl MapSurface for LeafletMap {
    fn add_layer(&mut self, layer: Layer) {
        match layer {
            Layer::Tiles { layer, active } => self.add_tiles(layer, active),
            Layer::Marker(marker) => self.add_marker(&marker),
            Layer::Legend(legend) => self.legend.set(Some(legend)),
        }
    }

    fn add_control(&mut self, control: Control) {
        let control = match control {
            Control::Layers(names) => {
                let mut base_layers = Options::new();
                for name in names {
                    let Some((_, layer)) = self.base_layers.iter().find(|(n, _)| *n == name) else {
                        log::warn!("Unknown base layer '{name}'");
                        continue;
                    };
                    base_layers = base_layers.set(&name, layer.clone());
                }
                leaflet::layers_control(&base_layers.into_object())
            }
            Control::Scale => leaflet::scale_control(),
        };
        control.add_to(&self.map);
    }

    fn set_view(&mut self, view: MapView) {
        let (lat, lng) = view.center.to_lat_lng_deg();
        self.map
            .set_view(&leaflet::lat_lng(lat, lng), f64::from(view.zoom));
    }
}
