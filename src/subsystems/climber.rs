//! The hanging climber.

use log::info;

use crate::peripherals::{HardwareError, Solenoid, SpeedController, check_finite};

/// Climber winch with a mechanical lock that holds the robot once hanging.
pub struct Climber {
    motor: Box<dyn SpeedController>,
    lock:  Box<dyn Solenoid>,
}

impl Climber {
    pub fn new(motor: Box<dyn SpeedController>, lock: Box<dyn Solenoid>) -> Self {
        Self { motor, lock }
    }

    /// Runs the winch at `speed` in `[-1, 1]`.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), HardwareError> {
        let speed = check_finite(speed)?.clamp(-1.0, 1.0);
        self.motor.set_percent_output(speed)
    }

    pub fn stop(&mut self) -> Result<(), HardwareError> { self.motor.neutral_output() }

    /// Engages the lock. Locking is one-way for the rest of the match.
    pub fn lock(&mut self) -> Result<(), HardwareError> {
        if !self.lock.get() {
            info!("Locking hanging climber");
        }
        self.lock.set(true)
    }

    pub fn is_locked(&self) -> bool { self.lock.get() }
}
