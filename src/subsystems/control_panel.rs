//! The control-panel spinner.

use crate::peripherals::{HardwareError, SpeedController, check_finite};

/// Wheel that spins the control panel. Only ever driven forwards.
pub struct ControlPanelSpinner {
    motor: Box<dyn SpeedController>,
}

impl ControlPanelSpinner {
    pub fn new(motor: Box<dyn SpeedController>) -> Self { Self { motor } }

    /// Spins at `speed` in `[0, 1]`.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), HardwareError> {
        let speed = check_finite(speed)?.clamp(0.0, 1.0);
        self.motor.set_percent_output(speed)
    }

    pub fn stop(&mut self) -> Result<(), HardwareError> { self.motor.neutral_output() }
}
