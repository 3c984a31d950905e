use crate::params::EffectParams;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Whole-unit random step in `[min, max)`: `min + floor(U[0,1) * (max - min))`.
///
/// Draws stay inside `[min, max)`, so speeds (6..12) and base radii (4..6) spread
/// less than the stock effect, whose `floor(U * max) + min` reaches 6..18 and 4..10.
#[inline]
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (rng.gen::<f32>() * (max - min)).floor()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Emission angle in radians.
    pub angle: f32,
    /// Speed multiplier the velocity was derived from.
    pub speed: f32,
    pub vel: Vec2,
    pub radius: f32,
    /// Index into the simulation palette.
    pub color: usize,
}

impl Particle {
    pub fn new(pos: Vec2, angle: f32, speed: f32, radius: f32, color: usize) -> Self {
        Self {
            pos,
            angle,
            speed,
            vel: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            radius,
            color,
        }
    }

    /// Random particle at `pos`. `speed_range` is picked by the caller so that
    /// escalated bursts can shift it by the current multiplier.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        pos: Vec2,
        speed_range: (f32, f32),
        params: &EffectParams,
    ) -> Self {
        let angle = TAU * rng.gen::<f32>();
        let speed = rand_between(rng, speed_range.0, speed_range.1);
        // jitter is drawn per axis
        let vx = (speed + rng.gen::<f32>() * params.velocity_jitter) * angle.cos();
        let vy = (speed + rng.gen::<f32>() * params.velocity_jitter) * angle.sin();
        let radius = rand_between(rng, params.radius_range.0, params.radius_range.1)
            + params.radius_jitter * rng.gen::<f32>();
        let color = rng.gen_range(0..params.palette.len().max(1));
        Self {
            pos,
            angle,
            speed,
            vel: Vec2::new(vx, vy),
            radius,
            color,
        }
    }

    /// One frame of motion: displace by `vel - normal`, shrink, slow down.
    #[inline]
    pub fn advance(&mut self, normal: Vec2, radius_decay: f32, velocity_decay: f32) {
        self.pos += self.vel - normal;
        self.radius -= radius_decay;
        self.vel *= velocity_decay;
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.radius >= 0.0
    }

    /// False once the radius is negative or the bounding circle lies entirely
    /// outside `[0, width] x [0, height]`. Touching an edge still counts as inside.
    #[inline]
    pub fn is_alive(&self, viewport: Viewport) -> bool {
        let r = self.radius;
        !(self.pos.x + r < 0.0
            || self.pos.x - r > viewport.width
            || self.pos.y + r < 0.0
            || self.pos.y - r > viewport.height
            || r < 0.0)
    }
}
