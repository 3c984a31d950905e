//! Viewport geometry and the high-density surface layout derived from it.

use crate::constants::{NORMAL_SPAN, SURFACE_SCALE};
use glam::Vec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre of the viewport; bursts without coordinates start here.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Displacement subtracted from particle motion, derived from an angle.
    #[inline]
    pub fn normal_for(&self, angle: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(-NORMAL_SPAN / w * angle.sin(), -NORMAL_SPAN / h * angle.cos())
    }

    pub fn surface_layout(&self) -> SurfaceLayout {
        SurfaceLayout::for_css_size(self.width as f64, self.height as f64, SURFACE_SCALE)
    }
}

/// Backing-store and CSS sizing for the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub css_width: f64,
    pub css_height: f64,
    pub backing_width: u32,
    pub backing_height: u32,
    /// Uniform transform applied so draw calls use CSS pixel coordinates.
    pub scale: f64,
}

impl SurfaceLayout {
    pub fn for_css_size(css_width: f64, css_height: f64, scale: f64) -> Self {
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            css_width,
            css_height,
            backing_width: (css_width * scale) as u32,
            backing_height: (css_height * scale) as u32,
            scale,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.css_width as f32, self.css_height as f32)
    }
}
