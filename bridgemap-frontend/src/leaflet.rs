//! Minimal bindings to the global Leaflet `L` namespace.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container: &web_sys::HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &Array, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map) -> Map;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(lat_lng: &Array, options: &Object) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, html: &str) -> Layer;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn layers_control(base_layers: &Object) -> Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = scale)]
    pub fn scale_control() -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map) -> Control;
}

pub fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&lat.into(), &lng.into())
}

/// Builds a plain JS object literal.
#[derive(Debug)]
pub struct Options(Object);

impl Options {
    pub fn new() -> Self {
        Self(Object::new())
    }

    #[must_use]
    pub fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        // Fails only if the target is not an object
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), &value.into());
        self
    }

    pub fn into_object(self) -> Object {
        self.0
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
