use crate::error::SetupError;
use crate::style::{self, ClassOp};
use burst_core::{PressSignal, SurfaceLayout, CLASS_POINTER};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page elements owned by the effect.
pub struct Surface {
    pub window: web::Window,
    pub body: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub pointer: web::HtmlElement,
}

impl Surface {
    /// Create the overlay canvas and pointer indicator and attach them to the body.
    pub fn initialize() -> Result<Self, SetupError> {
        let window = web::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let body = document.body().ok_or(SetupError::NoBody)?;

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into().ok())
            .ok_or(SetupError::CreateElement("canvas"))?;
        _ = canvas.set_attribute("style", &style::surface_style());

        let pointer: web::HtmlElement = document
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into().ok())
            .ok_or(SetupError::CreateElement("span"))?;
        _ = pointer.class_list().add_1(CLASS_POINTER);

        // Check before attaching anything so an unsupported page stays untouched.
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(SetupError::No2dContext)?;

        _ = body.append_child(&canvas);
        _ = body.append_child(&pointer);

        Ok(Self {
            window,
            body,
            canvas,
            ctx,
            pointer,
        })
    }

    pub fn viewport_layout(&self) -> SurfaceLayout {
        let w = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        burst_core::Viewport::new(w as f32, h as f32).surface_layout()
    }

    /// Size the backing store and CSS box, then reset the transform so draw
    /// calls use CSS pixels.
    pub fn apply_layout(&self, layout: &SurfaceLayout) {
        self.canvas.set_width(layout.backing_width);
        self.canvas.set_height(layout.backing_height);
        let css = self.canvas.style();
        _ = css.set_property("width", &style::px(layout.css_width));
        _ = css.set_property("height", &style::px(layout.css_height));
        _ = self
            .ctx
            .set_transform(layout.scale, 0.0, 0.0, layout.scale, 0.0, 0.0);
    }

    #[inline]
    pub fn move_pointer(&self, x: f64, y: f64) {
        let css = self.pointer.style();
        _ = css.set_property("top", &style::px(y));
        _ = css.set_property("left", &style::px(x));
    }

    pub fn apply_signal(&self, signal: PressSignal) {
        let cl = self.body.class_list();
        match style::class_op(signal) {
            ClassOp::Add(name) => {
                _ = cl.add_1(name);
            }
            ClassOp::Remove(name) => {
                _ = cl.remove_1(name);
            }
        }
    }
}
