use crate::constants::*;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook the mobile menu's open/close controls. Pages without a menu panel
/// are left untouched; each control is optional.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(panel) = document.query_selector(MENU_PANEL_SELECTOR).ok().flatten() else {
        log::debug!("[menu] no mobile menu on this page");
        return;
    };
    let backdrop = document
        .query_selector(MENU_BACKDROP_SELECTOR)
        .ok()
        .flatten();
    let body = document.body();

    let toggle: Rc<dyn Fn()> = {
        let panel = panel.clone();
        let backdrop = backdrop.clone();
        Rc::new(move || {
            let _ = panel.class_list().toggle(HIDDEN_CLASS);
            if let Some(b) = &backdrop {
                let _ = b.class_list().toggle(HIDDEN_CLASS);
            }
            if let Some(body) = &body {
                let _ = body.class_list().toggle(SCROLL_LOCK_CLASS);
            }
        })
    };

    let mut controls: Vec<web::Element> = [MENU_BUTTON_SELECTOR, MENU_CLOSE_SELECTOR]
        .iter()
        .filter_map(|sel| document.query_selector(sel).ok().flatten())
        .collect();
    controls.extend(backdrop);
    // following a link inside the menu closes it
    if let Ok(links) = panel.query_selector_all("a") {
        controls.extend(
            (0..links.length())
                .filter_map(|i| links.get(i))
                .filter_map(|n| n.dyn_into::<web::Element>().ok()),
        );
    }

    for el in &controls {
        let toggle = toggle.clone();
        dom::add_click_listener(el, move || toggle());
    }
    log::debug!("[menu] wired {} controls", controls.len());
}
