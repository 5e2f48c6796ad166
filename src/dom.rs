use crate::constants::param_key;
use ribbon_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Inner window size in CSS pixels; zero when unavailable.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|f| f.max(0.0) as u32)
            .unwrap_or(0)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// `data-ribbon-*` attributes on `el` as (key, value) pairs, prefix stripped.
pub fn param_overrides(el: &web::Element) -> Vec<(String, String)> {
    let attrs = el.attributes();
    (0..attrs.length())
        .filter_map(|i| attrs.item(i))
        .filter_map(|attr| {
            let name = attr.name();
            param_key(&name).map(|key| (key.to_string(), attr.value()))
        })
        .collect()
}
