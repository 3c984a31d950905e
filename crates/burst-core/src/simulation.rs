//! Particle simulation state and the per-frame step.

use crate::escalation::Escalation;
use crate::params::{BurstRange, EffectParams, NormalCoupling, ParamsError};
use crate::particle::Particle;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;

/// Immediate-mode drawing backend used by [`Simulation::step`].
pub trait ParticleCanvas {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub live: usize,
}

pub struct Simulation {
    pub particles: Vec<Particle>,
    pub escalation: Escalation,
    pub params: EffectParams,
    /// Displacement shared by all particles under [`NormalCoupling::Shared`].
    pub normal: Vec2,
    viewport: Viewport,
    rng: StdRng,
}

impl Simulation {
    pub fn new(params: EffectParams, viewport: Viewport) -> Result<Self, ParamsError> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            particles: Vec::new(),
            escalation: Escalation::default(),
            normal: viewport.origin(),
            params,
            viewport,
            rng,
        })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new viewport. The shared normal is reset to the new origin,
    /// which gives the first particle updated afterwards one large kick.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.normal = viewport.origin();
    }

    /// Speed range for new particles, shifted by the multiplier while escalated.
    fn speed_range(&self) -> (f32, f32) {
        if self.escalation.long_pressing {
            let m = self.escalation.multiplier;
            let (lo, hi) = self.params.escalated_speed_range;
            (lo + m, hi + m)
        } else {
            self.params.speed_range
        }
    }

    pub fn spawn_burst(&mut self, count: usize, at: Vec2) {
        let speed_range = self.speed_range();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, at, speed_range, &self.params);
            self.particles.push(p);
        }
    }

    pub fn spawn_burst_at_origin(&mut self, count: usize) {
        self.spawn_burst(count, self.viewport.origin());
    }

    fn roll_count(&mut self, range: BurstRange) -> usize {
        if range.max <= range.min {
            return range.min as usize;
        }
        self.rng.gen_range(range.min..range.max) as usize
    }

    /// Click burst: `[press_burst.min, press_burst.max)` particles.
    pub fn spawn_press_burst(&mut self, at: Vec2) -> usize {
        let n = self.roll_count(self.params.press_burst);
        self.spawn_burst(n, at);
        n
    }

    /// Long-press release burst, both ends shifted by the escalation offset.
    pub fn spawn_release_burst(&mut self, at: Vec2) -> usize {
        let range = self.release_burst_range();
        let n = self.roll_count(range);
        self.spawn_burst(n, at);
        n
    }

    pub fn release_burst_range(&self) -> BurstRange {
        self.params
            .release_burst
            .offset(self.escalation.burst_offset())
    }

    /// One display frame: clear, draw and advance, escalate, cull.
    pub fn step<C: ParticleCanvas + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        canvas.clear();

        let viewport = self.viewport;
        let radius_decay = self.params.radius_decay;
        let velocity_decay = self.params.velocity_decay;
        let coupling = self.params.normal_coupling;
        let mut drawn = 0;
        for p in self.particles.iter_mut() {
            if !p.is_drawable() {
                continue;
            }
            let color = self
                .params
                .palette
                .get(p.color)
                .map(String::as_str)
                .unwrap_or_default();
            canvas.fill_circle(p.pos, p.radius, color);
            drawn += 1;

            match coupling {
                NormalCoupling::Shared => {
                    p.advance(self.normal, radius_decay, velocity_decay);
                    self.normal = viewport.normal_for(p.angle);
                }
                NormalCoupling::Independent => {
                    p.advance(viewport.normal_for(p.angle), radius_decay, velocity_decay);
                }
            }
        }

        self.escalation
            .step(self.params.escalation_growth, self.params.escalation_decay);

        let before = self.particles.len();
        self.particles.retain(|p| p.is_alive(viewport));
        let live = self.particles.len();

        FrameStats {
            drawn,
            culled: before - live,
            live,
        }
    }
}
