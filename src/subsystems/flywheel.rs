//! The shooter flywheel.

use log::info;

use crate::peripherals::{HardwareError, Solenoid, VelocityController};

/// Closed-loop flywheel plus the hood that changes the shot angle.
pub struct Flywheel {
    motor:      Box<dyn VelocityController>,
    hood:       Box<dyn Solenoid>,
    target_rpm: Option<u32>,
}

impl Flywheel {
    pub fn new(motor: Box<dyn VelocityController>, hood: Box<dyn Solenoid>) -> Self {
        Self {
            motor,
            hood,
            target_rpm: None,
        }
    }

    /// Spins up to `rpm`, or lets the flywheel coast down with `None`.
    pub fn set_target_rpm(&mut self, rpm: Option<u32>) -> Result<(), HardwareError> {
        match rpm {
            Some(rpm) => self.motor.set_velocity_rpm(f64::from(rpm))?,
            None => self.motor.neutral_output()?,
        }
        if self.target_rpm != rpm {
            info!("Flywheel target {:?} rpm", rpm);
        }
        self.target_rpm = rpm;
        Ok(())
    }

    /// The last requested speed.
    pub const fn target_rpm(&self) -> Option<u32> { self.target_rpm }

    /// Measured flywheel speed.
    pub fn velocity_rpm(&self) -> Result<f64, HardwareError> { self.motor.velocity_rpm() }

    /// Flips the hood between the close and far shot angles.
    pub fn toggle_hood(&mut self) -> Result<bool, HardwareError> { self.hood.toggle() }

    /// Whether the hood is raised for the far shot.
    pub fn is_hood_up(&self) -> bool { self.hood.get() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockMotor, MockSolenoid, MotorOutput};

    #[test]
    fn target_drives_velocity_loop() {
        let motor = MockMotor::default();
        let mut flywheel =
            Flywheel::new(Box::new(motor.clone()), Box::new(MockSolenoid::default()));

        flywheel.set_target_rpm(Some(5200)).unwrap();
        assert_eq!(motor.output(), Some(MotorOutput::VelocityRpm(5200.0)));
        assert_eq!(flywheel.target_rpm(), Some(5200));
        assert_eq!(flywheel.velocity_rpm(), Ok(5200.0));

        flywheel.set_target_rpm(None).unwrap();
        assert_eq!(motor.output(), Some(MotorOutput::Neutral));
        assert_eq!(flywheel.target_rpm(), None);
    }

    #[test]
    fn hood_toggles() {
        let mut flywheel = Flywheel::new(
            Box::new(MockMotor::default()),
            Box::new(MockSolenoid::default()),
        );
        assert!(!flywheel.is_hood_up());
        assert_eq!(flywheel.toggle_hood(), Ok(true));
        assert!(flywheel.is_hood_up());
    }
}
