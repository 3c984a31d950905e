/// Long-press intensity shared by the input handler and the frame loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Escalation {
    pub long_pressing: bool,
    pub multiplier: f32,
}

impl Escalation {
    pub fn begin(&mut self) {
        self.long_pressing = true;
    }

    pub fn end(&mut self) {
        self.long_pressing = false;
    }

    /// Per-frame update. Decay stops once the multiplier has gone negative, so
    /// it never sinks more than one decay step below zero.
    pub fn step(&mut self, growth: f32, decay: f32) {
        if self.long_pressing {
            self.multiplier += growth;
        } else if self.multiplier >= 0.0 {
            self.multiplier -= decay;
        }
    }

    /// Whole-particle shift applied to release bursts: `ceil(multiplier)`,
    /// floored at zero so a residual negative multiplier never shrinks a burst.
    pub fn burst_offset(&self) -> i64 {
        (self.multiplier.ceil() as i64).max(0)
    }
}
