#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use hero_core::{Animation, FieldConfig, InputQueue, ParticleField, StopToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod anchor;
mod clipboard;
mod constants;
mod dom;
mod events;
mod frame;
mod menu;
mod scroll;
mod stats;
mod surface;

pub use clipboard::copy_to_clipboard;

thread_local! {
    // stop handle for the running hero animation, if any
    static HERO_STOP: RefCell<Option<StopToken>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    dom::on_dom_ready(|| {
        if let Some(document) = dom::window_document() {
            menu::wire_mobile_menu(&document);
            scroll::wire_smooth_scroll(&document);
        }
        spawn_local(async move {
            if let Err(e) = init_hero().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

/// Stop the hero animation after its current frame. Input handlers go quiet
/// and no further frames are requested.
#[wasm_bindgen(js_name = stopHero)]
pub fn stop_hero() {
    HERO_STOP.with(|slot| {
        if let Some(token) = slot.borrow().as_ref() {
            token.stop();
        }
    });
}

async fn init_hero() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        log::info!("[hero] no #{} on this page", constants::CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let config = match FieldConfig::from_lookup(|name| canvas.get_attribute(name)) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldConfig::default()
        }
    };
    if let Some(level) = config.log_level {
        log::set_max_level(level);
        log::info!("[config] log level {}", level);
    }

    let icons = surface::load_icons().await?;
    let canvas_surface = surface::CanvasSurface::new(&canvas, icons)?;
    let (width, height) = dom::container_size(&canvas);

    let inputs = InputQueue::new();
    let stop = StopToken::new();
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        inputs: inputs.clone(),
        stop: stop.clone(),
    });

    let field = ParticleField::new(config, width, height, inputs, canvas_surface);
    let animation = Animation::with_token(field, stop.clone());

    HERO_STOP.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(stop) {
            previous.stop();
        }
    });
    frame::start_loop(Rc::new(RefCell::new(animation)));
    Ok(())
}
