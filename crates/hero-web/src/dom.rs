use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` once the document has been parsed: now if it already has,
/// otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Elements matching `selector`, skipping anything that is not an `Element`.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Box size of the canvas's container, which the canvas backing store follows.
pub fn container_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    match canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
    {
        Some(parent) => (
            parent.offset_width().max(0) as u32,
            parent.offset_height().max(0) as u32,
        ),
        None => (canvas.width(), canvas.height()),
    }
}

/// Top-left of the element's bounding box in client coordinates.
#[inline]
pub fn client_origin(element: &web::Element) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}
