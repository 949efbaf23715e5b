//! Driver control.
//!
//! [`TeleopCommand`](teleop::TeleopCommand) is the one command that reads the
//! controllers. Every cycle it turns button edges into schedule and cancel
//! requests and publishes the stick and trigger values the other commands
//! drive from as [`OperatorInputs`](inputs::OperatorInputs).
//!
//! # Example
//!
//! ```ignore
//! use powercell::{command::Scheduler, config::{TeleopConfig, VisionAlignConfig}};
//!
//! let mut scheduler = Scheduler::new();
//! let teleop = robot.teleop(
//!     &mut scheduler,
//!     Box::new(driver),
//!     Box::new(operator),
//!     TeleopConfig::default(),
//!     VisionAlignConfig::default(),
//! );
//!
//! scheduler.schedule(teleop);
//! loop {
//!     scheduler.run();
//! }
//! ```

/// Values derived from the controllers each cycle.
pub mod inputs;

/// The teleop dispatch command.
pub mod teleop;
