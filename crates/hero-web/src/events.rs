use crate::dom;
use glam::Vec2;
use hero_core::{InputEvent, InputQueue, StopToken, TouchPoints};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What the window-level handlers need: the canvas to translate coordinates
/// against, the queue the field drains, and the token that silences them
/// once the animation stops.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub inputs: InputQueue,
    pub stop: StopToken,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_touchmove(&w);
    wire_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if w.stop.is_stopped() {
            return;
        }
        w.inputs.push(InputEvent::PointerMove {
            client: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            origin: dom::client_origin(&w.canvas),
        });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if w.stop.is_stopped() {
            return;
        }
        let touches = touch_points(&ev);
        if touches.is_empty() {
            return;
        }
        w.inputs.push(InputEvent::TouchMove {
            touches,
            origin: dom::client_origin(&w.canvas),
        });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if w.stop.is_stopped() {
            return;
        }
        let (width, height) = dom::container_size(&w.canvas);
        w.inputs.push(InputEvent::Resize { width, height });
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn touch_points(ev: &web::TouchEvent) -> TouchPoints {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
