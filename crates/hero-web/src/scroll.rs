use crate::anchor::fragment_selector;
use crate::constants::IN_PAGE_ANCHOR_SELECTOR;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Make every in-page anchor scroll smoothly to its target instead of jumping.
pub fn wire_smooth_scroll(document: &web::Document) {
    let anchors = dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR);
    for anchor in &anchors {
        let link = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(selector) = fragment_selector(&href) {
                scroll_to(selector);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::debug!("[scroll] wired {} anchors", anchors.len());
}

fn scroll_to(selector: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(None) => {}
        Err(e) => log::warn!("[scroll] invalid target {}: {:?}", selector, e),
    }
}
