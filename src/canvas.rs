use burst_core::ParticleCanvas;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// 2D-context drawing backend for the simulation.
pub struct CanvasPainter<'a> {
    pub ctx: &'a web::CanvasRenderingContext2d,
    pub canvas: &'a web::HtmlCanvasElement,
}

impl ParticleCanvas for CanvasPainter<'_> {
    fn clear(&mut self) {
        // backing size in scaled units; covers the whole surface
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
