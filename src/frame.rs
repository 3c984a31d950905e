use crate::canvas::CanvasPainter;
use crate::dom::Surface;
use burst_core::Effect;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub effect: Rc<RefCell<Effect>>,
    pub surface: Rc<Surface>,
    pub epoch: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.epoch.elapsed();
        let mut painter = CanvasPainter {
            ctx: &self.surface.ctx,
            canvas: &self.surface.canvas,
        };
        let (stats, signal) = self.effect.borrow_mut().frame(now, &mut painter);
        if let Some(s) = signal {
            self.surface.apply_signal(s);
        }
        self.frames += 1;
        if stats.culled > 0 || stats.drawn > 0 {
            log::trace!(
                "[frame {}] drawn={} culled={} live={}",
                self.frames,
                stats.drawn,
                stats.culled,
                stats.live
            );
        }
    }
}

/// Drive `frame` from requestAnimationFrame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
