use crate::constants::FRAME_STATS_INTERVAL;
use crate::stats::FrameStats;
use crate::surface::CanvasSurface;
use hero_core::{Animation, LoopStatus};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `animation` from `requestAnimationFrame` until its stop token fires.
///
/// The callback reschedules itself after every `Continue`; on `Stopped` it
/// releases itself and nothing further is scheduled.
pub fn start_loop(animation: Rc<RefCell<Animation<CanvasSurface>>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut stats = FrameStats::new(FRAME_STATS_INTERVAL);
    let mut last = Instant::now();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        if let Some(avg_ms) = stats.record(now - last) {
            log::debug!(
                "[frame] avg {:.2} ms over {} frames",
                avg_ms,
                FRAME_STATS_INTERVAL
            );
        }
        last = now;

        let status = animation.borrow_mut().step();
        match status {
            LoopStatus::Continue => request_frame(&tick_clone),
            LoopStatus::Stopped => {
                // drop our own closure; the JS shim frees it once this call returns
                drop(tick_clone.borrow_mut().take());
            }
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick);
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
