//! Runtime parameters for a burst effect instance.
//!
//! Defaults reproduce the stock effect. Front-ends may tweak a copy before
//! constructing a [`Simulation`](crate::Simulation); values are checked once by
//! [`EffectParams::validate`] and never again on the hot path.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

/// How the per-frame "normal" displacement is shared between particles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalCoupling {
    /// One vector for the whole simulation, rewritten by every particle update.
    /// Each particle is displaced by whatever the previously updated particle
    /// left behind. Matches the stock effect frame for frame.
    #[default]
    Shared,
    /// Each particle is displaced by the normal derived from its own angle.
    Independent,
}

/// Half-open `[min, max)` range of burst sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurstRange {
    pub min: u32,
    pub max: u32,
}

impl BurstRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Shift both ends by a whole number of particles, saturating at zero.
    pub fn offset(self, by: i64) -> Self {
        let shift = |v: u32| (v as i64 + by).clamp(0, u32::MAX as i64) as u32;
        Self {
            min: shift(self.min),
            max: shift(self.max),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be in (0, 1], got {value}")]
    DecayOutOfRange { name: &'static str, value: f32 },
    #[error("{name} range is empty: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("palette must contain at least one colour")]
    EmptyPalette,
    #[error("long-press threshold must be non-zero")]
    ZeroThreshold,
}

#[derive(Clone, Debug)]
pub struct EffectParams {
    pub press_burst: BurstRange,
    pub release_burst: BurstRange,
    pub speed_range: (f32, f32),
    pub escalated_speed_range: (f32, f32),
    pub radius_range: (f32, f32),
    pub radius_jitter: f32,
    pub velocity_jitter: f32,
    pub radius_decay: f32,
    pub velocity_decay: f32,
    pub escalation_growth: f32,
    pub escalation_decay: f32,
    pub long_press_threshold: Duration,
    pub normal_coupling: NormalCoupling,
    pub palette: Vec<String>,
    /// Fixed RNG seed; `None` draws from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            press_burst: BurstRange::new(PRESS_BURST_MIN, PRESS_BURST_MAX),
            release_burst: BurstRange::new(RELEASE_BURST_MIN, RELEASE_BURST_MAX),
            speed_range: (SPEED_MIN, SPEED_MAX),
            escalated_speed_range: (ESCALATED_SPEED_MIN, ESCALATED_SPEED_MAX),
            radius_range: (RADIUS_BASE_MIN, RADIUS_BASE_MAX),
            radius_jitter: RADIUS_JITTER,
            velocity_jitter: VELOCITY_JITTER,
            radius_decay: RADIUS_DECAY_PER_FRAME,
            velocity_decay: VELOCITY_DECAY_PER_FRAME,
            escalation_growth: ESCALATION_GROWTH_PER_FRAME,
            escalation_decay: ESCALATION_DECAY_PER_FRAME,
            long_press_threshold: Duration::from_millis(LONG_PRESS_THRESHOLD_MS),
            normal_coupling: NormalCoupling::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            seed: None,
        }
    }
}

impl EffectParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_normal_coupling(mut self, coupling: NormalCoupling) -> Self {
        self.normal_coupling = coupling;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let scalars = [
            ("radius_jitter", self.radius_jitter),
            ("velocity_jitter", self.velocity_jitter),
            ("radius_decay", self.radius_decay),
            ("escalation_growth", self.escalation_growth),
            ("escalation_decay", self.escalation_decay),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }
        // both must shrink every frame or particles and the multiplier never settle
        for (name, value) in [
            ("radius_decay", self.radius_decay),
            ("escalation_decay", self.escalation_decay),
        ] {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("radius_jitter", self.radius_jitter),
            ("velocity_jitter", self.velocity_jitter),
            ("escalation_growth", self.escalation_growth),
        ] {
            if value < 0.0 {
                return Err(ParamsError::Negative { name, value });
            }
        }
        if !(self.velocity_decay > 0.0 && self.velocity_decay <= 1.0) {
            return Err(ParamsError::DecayOutOfRange {
                name: "velocity_decay",
                value: self.velocity_decay,
            });
        }
        let ranges = [
            ("speed_range", self.speed_range),
            ("escalated_speed_range", self.escalated_speed_range),
            ("radius_range", self.radius_range),
            (
                "press_burst",
                (self.press_burst.min as f32, self.press_burst.max as f32),
            ),
            (
                "release_burst",
                (self.release_burst.min as f32, self.release_burst.max as f32),
            ),
        ];
        for (name, (min, max)) in ranges {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(ParamsError::EmptyRange { name, min, max });
            }
        }
        if self.palette.is_empty() {
            return Err(ParamsError::EmptyPalette);
        }
        if self.long_press_threshold.is_zero() {
            return Err(ParamsError::ZeroThreshold);
        }
        Ok(())
    }
}
