//! Open-loop ramp limiting.

/// Limits how fast an output may change from one cycle to the next.
///
/// Configured the way motor controllers express ramps: the time it takes to
/// go from neutral to full output. With a ramp of `0.0` the limiter passes
/// every value straight through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlewLimiter {
    full_scale: f64,
    period:     f64,
    max_step:   Option<f64>,
    last:       f64,
}

impl SlewLimiter {
    /// Creates a limiter for an output whose full scale is `full_scale`
    /// (1.0 for percent output, 12.0 for volts) and which is updated every
    /// `period` seconds.
    pub fn new(full_scale: f64, period: f64) -> Self {
        Self {
            full_scale: full_scale.abs(),
            period,
            max_step: None,
            last: 0.0,
        }
    }

    /// Sets the ramp time from neutral to full output. Non-positive values
    /// disable ramping.
    pub fn set_ramp(&mut self, seconds_from_neutral_to_full: f64) {
        self.max_step = (seconds_from_neutral_to_full > 0.0)
            .then(|| self.full_scale * self.period / seconds_from_neutral_to_full);
    }

    /// Whether a ramp is currently configured.
    pub const fn is_ramping(&self) -> bool { self.max_step.is_some() }

    /// Returns the output to apply this cycle on the way to `target`.
    pub fn calculate(&mut self, target: f64) -> f64 {
        let next = match self.max_step {
            Some(step) => self.last + (target - self.last).clamp(-step, step),
            None => target,
        };
        self.last = next;
        next
    }

    /// Jumps straight to `value`, e.g. after a neutral command.
    pub fn reset(&mut self, value: f64) { self.last = value; }
}
