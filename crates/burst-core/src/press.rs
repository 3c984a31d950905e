//! Long-press detection as an explicit state machine.
//!
//! Time is passed in by the caller as a monotonic offset, which keeps the
//! machine free of timers: the deadline is checked whenever the host polls
//! (each frame) and once more on release, so a release that lands after the
//! deadline always counts as a long press.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed { deadline: Duration },
    LongPress,
}

/// What a release ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No press was being tracked.
    Stray,
    Click,
    LongPress,
}

#[derive(Clone, Debug)]
pub struct PressTracker {
    threshold: Duration,
    state: PressState,
}

impl PressTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            state: PressState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> PressState {
        self.state
    }

    /// Arm a new deadline. Returns the state being replaced; only one press is
    /// tracked at a time.
    pub fn press(&mut self, now: Duration) -> PressState {
        let prev = self.state;
        self.state = PressState::Pressed {
            deadline: now + self.threshold,
        };
        prev
    }

    /// Returns true exactly once per press: on the first poll at or after the
    /// deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            PressState::Pressed { deadline } if now >= deadline => {
                self.state = PressState::LongPress;
                true
            }
            _ => false,
        }
    }

    /// Cancel the pending deadline (if any) and return to idle.
    pub fn release(&mut self, now: Duration) -> Release {
        self.poll(now);
        let outcome = match self.state {
            PressState::Idle => Release::Stray,
            PressState::Pressed { .. } => Release::Click,
            PressState::LongPress => Release::LongPress,
        };
        self.state = PressState::Idle;
        outcome
    }
}
