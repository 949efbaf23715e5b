//! # Powercell
//!
//! Driver-control wiring for a power-cell shooting robot, on top of a small
//! command scheduler. It provides:
//!
//! - **Teleop Dispatch**: A single command that turns controller button edges
//!   into schedule and cancel requests for everything else.
//! - **Commands**: Curvature and closed-loop drive, vision alignment, feeder,
//!   flywheel, climber and control-panel commands, plus one-shot helpers.
//! - **Drivetrain Abstraction**: The [`DriveTrainVariant`](drivetrain::DriveTrainVariant)
//!   contract for motor controllers, with odometry and feed-forward on top.
//! - **Hardware Seams**: Traits for motors, solenoids, controllers and vision,
//!   with vexide implementations for the V5 Brain.
//! - **Logging**: A console and file logger for reviewing matches.
//!
//! ## Quick Start
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
//! scheduler.schedule(teleop);
//!
//! loop {
//!     scheduler.run();
//!     std::thread::sleep(powercell::config::LOOP_PERIOD);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`command`]: The command trait and scheduler.
//! - [`commands`]: The robot's commands.
//! - [`opcontrol`]: Teleop dispatch.
//! - [`drivetrain`]: Drivetrain contract, kinematics and odometry.
//! - [`subsystems`]: Flywheel, feeder, climber, intake and control panel.
//! - [`peripherals`]: Hardware traits and controllers.
//! - [`motion`]: Latches, deadbands, PID and ramps.
//! - [`fs`]: Logging.

/// Command framework.
///
/// Provides the [`Command`](command::Command) lifecycle trait, the
/// [`Scheduler`](command::Scheduler) that runs commands once per cycle, and
/// closure-built [`FunctionalCommand`](command::FunctionalCommand)s.
pub mod command;

/// Pre-built robot commands.
pub mod commands;

/// Default-able configuration structs and the loop period.
pub mod config;

/// Differential drivetrain module.
///
/// Provides the [`DriveTrainVariant`](drivetrain::DriveTrainVariant) hardware
/// contract and the [`DriveTrain`](drivetrain::DriveTrain) subsystem:
///
/// - **Kinematics**: Curvature drive mixing and wheel-speed feed-forward.
/// - **Odometry**: Pose integration from per-side delta rotations.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to a file.
pub mod fs;

/// Control helpers shared by commands and hardware implementations.
pub mod motion;

/// Operator control module.
///
/// Maps driver and operator controller input to command scheduling during
/// driver control.
pub mod opcontrol;

/// Hardware traits, errors and controller snapshots.
pub mod peripherals;

/// Subsystem bundle and teleop wiring.
pub mod robot;

/// Robot mechanisms.
pub mod subsystems;

/// Competition lifecycle on the V5 Brain.
#[cfg(target_vendor = "vex")]
pub mod competition;

#[cfg(test)]
mod testing;
