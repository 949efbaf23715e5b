//! The drivetrain on V5 smart motors.
//!
//! # Example
//!
//! ```ignore
//! use powercell::{drivetrain::vex::VexDriveTrain, peripherals::vex::MotorGroup};
//! use vexide::prelude::*;
//!
//! let variant = VexDriveTrain::new(
//!     MotorGroup::new([
//!         Motor::new(peripherals.port_1, Gearset::Blue, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Blue, Direction::Forward),
//!     ]),
//!     MotorGroup::new([
//!         Motor::new(peripherals.port_3, Gearset::Blue, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Blue, Direction::Reverse),
//!     ]),
//!     36.0 / 60.0,
//! );
//! ```

use super::motor::MotorDriveTrain;
use crate::peripherals::vex::MotorGroup;

/// Two V5 motor groups geared to the wheels.
pub type VexDriveTrain = MotorDriveTrain<MotorGroup>;
