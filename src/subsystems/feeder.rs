//! The power-cell feeder.

use crate::peripherals::{HardwareError, SpeedController, check_finite};

/// Moves power cells towards the flywheel (positive) or back out (negative).
pub struct Feeder {
    motor: Box<dyn SpeedController>,
}

impl Feeder {
    pub fn new(motor: Box<dyn SpeedController>) -> Self { Self { motor } }

    /// Runs the feeder at `speed` in `[-1, 1]`.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), HardwareError> {
        let speed = check_finite(speed)?.clamp(-1.0, 1.0);
        self.motor.set_percent_output(speed)
    }

    pub fn stop(&mut self) -> Result<(), HardwareError> { self.motor.neutral_output() }
}
