//! The ground intake.

use log::debug;

use crate::peripherals::{HardwareError, Solenoid};

/// Intake that deploys outside the frame perimeter on a pneumatic arm.
pub struct Intake {
    extension: Box<dyn Solenoid>,
}

impl Intake {
    pub fn new(extension: Box<dyn Solenoid>) -> Self { Self { extension } }

    /// Deploys a stowed intake or stows a deployed one.
    pub fn toggle_extension(&mut self) -> Result<bool, HardwareError> {
        let extended = self.extension.toggle()?;
        debug!("Intake {}", if extended { "extended" } else { "retracted" });
        Ok(extended)
    }

    pub fn is_extended(&self) -> bool { self.extension.get() }
}
