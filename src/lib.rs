#![cfg(target_arch = "wasm32")]
use burst_core::{Effect, EffectParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod error;
mod events;
mod frame;
mod style;

pub use error::SetupError;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("click-burst starting");

    if let Err(e) = init(EffectParams::default()) {
        match e.downcast_ref::<SetupError>() {
            Some(setup) => log::warn!("canvas or event listeners unsupported: {}", setup),
            None => log::error!("init error: {:?}", e),
        }
    }
    Ok(())
}

fn init(params: EffectParams) -> anyhow::Result<()> {
    let surface = Rc::new(dom::Surface::initialize()?);

    let layout = surface.viewport_layout();
    surface.apply_layout(&layout);
    let effect = Rc::new(RefCell::new(Effect::new(params, layout.viewport())?));
    log::info!(
        "[surface] {}x{} css, {}x{} backing",
        layout.css_width,
        layout.css_height,
        layout.backing_width,
        layout.backing_height
    );

    let epoch = Instant::now();
    events::wire_input_handlers(events::InputWiring {
        effect: effect.clone(),
        surface: surface.clone(),
        epoch,
    });

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        effect,
        surface,
        epoch,
        frames: 0,
    })));
    Ok(())
}
