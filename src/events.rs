use crate::dom::Surface;
use burst_core::Effect;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub effect: Rc<RefCell<Effect>>,
    pub surface: Rc<Surface>,
    pub epoch: Instant,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn add_window_listener<E>(w: &InputWiring, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = w
        .surface
        .window
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let wc = w.clone();
    add_window_listener(w, "pointerdown", move |ev: web::PointerEvent| {
        let now = wc.epoch.elapsed();
        let signals = wc.effect.borrow_mut().pointer_down(client_pos(&ev), now);
        for s in signals {
            wc.surface.apply_signal(s);
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let wc = w.clone();
    add_window_listener(w, "pointerup", move |ev: web::PointerEvent| {
        let now = wc.epoch.elapsed();
        let signals = wc.effect.borrow_mut().pointer_up(client_pos(&ev), now);
        for s in signals {
            wc.surface.apply_signal(s);
        }
    });
}

fn wire_pointermove(w: &InputWiring) {
    let wc = w.clone();
    add_window_listener(w, "pointermove", move |ev: web::PointerEvent| {
        wc.surface
            .move_pointer(ev.client_x() as f64, ev.client_y() as f64);
    });
}

fn wire_resize(w: &InputWiring) {
    let wc = w.clone();
    add_window_listener(w, "resize", move |_ev: web::Event| {
        resize(&wc.surface, &wc.effect);
    });
}

/// Re-measure the viewport and push the new layout to the surface and simulation.
pub fn resize(surface: &Surface, effect: &RefCell<Effect>) {
    let layout = surface.viewport_layout();
    surface.apply_layout(&layout);
    effect.borrow_mut().resize(layout.viewport());
    log::debug!(
        "[resize] css={}x{} backing={}x{}",
        layout.css_width,
        layout.css_height,
        layout.backing_width,
        layout.backing_height
    );
}
