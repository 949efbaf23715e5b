//! Hardware seams for everything the robot drives or reads.
//!
//! Subsystems never talk to a vendor API directly. They hold boxed trait
//! objects from this module, which lets the same teleop wiring run on a V5
//! Brain (see the `vex` module) or against the in-memory doubles used by the tests.
//!
//! # Example
//!
//! ```ignore
//! use powercell::peripherals::{Solenoid, SpeedController};
//!
//! fn spin_up(motor: &mut dyn SpeedController, hood: &mut dyn Solenoid) {
//!     motor.set_percent_output(0.75).unwrap_or_else(|e| log::warn!("{e}"));
//!     hood.toggle().unwrap_or_else(|e| log::warn!("{e}"));
//! }
//! ```

/// Xbox-style operator controller snapshots with edge detection.
pub mod controller;

/// vexide-backed implementations of the hardware traits.
#[cfg(target_vendor = "vex")]
pub mod vex;

use std::{cell::RefCell, rc::Rc};

use snafu::Snafu;

/// Errors reported by hardware implementations.
#[derive(Debug, Snafu, Clone, PartialEq)]
#[snafu(visibility(pub))]
pub enum HardwareError {
    /// Nothing answered on the configured port.
    #[snafu(display("no device is connected on port {port}"))]
    Disconnected {
        /// The port that was addressed.
        port: u8,
    },

    /// The device answered but rejected the request.
    #[snafu(display("device error: {message}"))]
    Device {
        /// Message reported by the device driver.
        message: String,
    },

    /// A non-finite value was passed to an output.
    #[snafu(display("refusing to apply non-finite output {value}"))]
    InvalidValue {
        /// The offending value.
        value: f64,
    },
}

/// Rejects NaN and infinite outputs before they reach hardware.
pub fn check_finite(value: f64) -> Result<f64, HardwareError> {
    if value.is_finite() {
        Ok(value)
    } else {
        InvalidValueSnafu { value }.fail()
    }
}

/// Full-scale motor voltage.
pub const MAX_VOLTAGE: f64 = 12.0;

/// An open-loop motor output.
pub trait SpeedController {
    /// Runs the motor at a fraction of full output, in `[-1, 1]`.
    fn set_percent_output(&mut self, percent: f64) -> Result<(), HardwareError>;

    /// Applies a raw voltage to the motor.
    fn set_voltage(&mut self, volts: f64) -> Result<(), HardwareError>;

    /// Stops driving the motor and lets it coast.
    fn neutral_output(&mut self) -> Result<(), HardwareError>;
}

/// A motor with closed-loop velocity control on the controller itself.
pub trait VelocityController: SpeedController {
    /// Sets the closed-loop velocity target in RPM.
    fn set_velocity_rpm(&mut self, rpm: f64) -> Result<(), HardwareError>;

    /// Reads back the measured velocity in RPM.
    fn velocity_rpm(&self) -> Result<f64, HardwareError>;
}

/// A velocity-controlled motor with an integrated encoder. Positions are
/// motor shaft rotations.
pub trait EncoderMotor: VelocityController {
    /// Reads the encoder.
    fn position_rotations(&self) -> Result<f64, HardwareError>;

    /// Overwrites the encoder reading.
    fn set_position_rotations(&mut self, rotations: f64) -> Result<(), HardwareError>;

    /// Drives to an absolute encoder position under closed-loop control.
    fn set_position_target(&mut self, rotations: f64) -> Result<(), HardwareError>;
}

/// A single-acting pneumatic solenoid.
pub trait Solenoid {
    /// Extends (`true`) or retracts (`false`) the solenoid.
    fn set(&mut self, extended: bool) -> Result<(), HardwareError>;

    /// Returns the last commanded state.
    fn get(&self) -> bool;

    /// Flips the solenoid and returns the new state.
    fn toggle(&mut self) -> Result<bool, HardwareError> {
        let next = !self.get();
        self.set(next)?;
        Ok(next)
    }
}

/// A vision camera that reports where the goal target sits in frame.
pub trait VisionSensor {
    /// Horizontal offset of the target from the crosshair in degrees,
    /// positive to the right. `None` when no target is visible.
    fn horizontal_offset(&mut self) -> Option<f64>;
}

/// Shares a subsystem between the commands that drive it.
pub fn make_cloneable<T>(t: T) -> Rc<RefCell<T>> { Rc::new(RefCell::new(t)) }
