//! Pointer-driven controller tying press tracking to the simulation.
//!
//! The front-end forwards pointer events and frame ticks here and applies the
//! returned [`PressSignal`]s to its visual state (CSS classes on the page).

use crate::params::{EffectParams, ParamsError};
use crate::press::{PressState, PressTracker, Release};
use crate::simulation::{FrameStats, ParticleCanvas, Simulation};
use crate::viewport::Viewport;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressSignal {
    Pressed,
    LongPressStarted,
    LongPressEnded,
    Released,
}

pub type Signals = SmallVec<[PressSignal; 2]>;

pub struct Effect {
    pub sim: Simulation,
    press: PressTracker,
}

impl Effect {
    pub fn new(params: EffectParams, viewport: Viewport) -> Result<Self, ParamsError> {
        let threshold = params.long_press_threshold;
        Ok(Self {
            sim: Simulation::new(params, viewport)?,
            press: PressTracker::new(threshold),
        })
    }

    #[inline]
    pub fn press_state(&self) -> PressState {
        self.press.state()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.sim.resize(viewport);
    }

    pub fn pointer_down(&mut self, at: Vec2, now: Duration) -> Signals {
        let mut out = Signals::new();
        if self.press.press(now) == PressState::LongPress {
            // the previous press never saw its release
            self.sim.escalation.end();
            out.push(PressSignal::LongPressEnded);
        }
        let n = self.sim.spawn_press_burst(at);
        log::debug!("[press] burst of {} at ({:.0},{:.0})", n, at.x, at.y);
        out.push(PressSignal::Pressed);
        out
    }

    pub fn pointer_up(&mut self, at: Vec2, now: Duration) -> Signals {
        let mut out = Signals::new();
        match self.press.release(now) {
            Release::LongPress => {
                if !self.sim.escalation.long_pressing {
                    // deadline passed without a frame to observe it
                    self.sim.escalation.begin();
                    out.push(PressSignal::LongPressStarted);
                }
                out.push(PressSignal::LongPressEnded);
                let n = self.sim.spawn_release_burst(at);
                log::debug!(
                    "[press] long-press release burst of {} (multiplier {:.1})",
                    n,
                    self.sim.escalation.multiplier
                );
                self.sim.escalation.end();
            }
            Release::Click | Release::Stray => {}
        }
        out.push(PressSignal::Released);
        out
    }

    /// Poll the long-press deadline, then run one simulation frame.
    pub fn frame<C: ParticleCanvas + ?Sized>(
        &mut self,
        now: Duration,
        canvas: &mut C,
    ) -> (FrameStats, Option<PressSignal>) {
        let signal = if self.press.poll(now) {
            self.sim.escalation.begin();
            log::debug!("[press] long-press started");
            Some(PressSignal::LongPressStarted)
        } else {
            None
        };
        (self.sim.step(canvas), signal)
    }
}
