//! The robot's control commands.
//!
//! Teleop commands don't read the controllers themselves. Each one is built
//! with [`Supplier`]s that return the value it should act on this cycle,
//! which keeps the input mapping in one place
//! ([`opcontrol`](crate::opcontrol)) and the commands reusable by anything
//! that can produce a number.
//!
//! # Example
//!
//! ```ignore
//! use powercell::commands::mechanisms::ClimbSpeedCommand;
//!
//! let inputs = shared_inputs.clone();
//! let climb = ClimbSpeedCommand::new(climber.clone(), Box::new(move || inputs.get().climb_speed));
//! let id = scheduler.register(climb);
//! ```

/// Teleop driving, open loop and closed loop.
pub mod drive;

/// Mechanism commands driven by a supplied speed.
pub mod mechanisms;

/// One-line commands built from closures.
pub mod single;

/// Driving while turning towards the vision target.
pub mod vision_align;

pub use self::{
    drive::{KinematicsDriveCommand, PercentDriveCommand},
    mechanisms::{
        ClimbSpeedCommand, ControlPanelCommand, FlywheelSpeedCommand, PowerCellFeedCommand,
        PowerCellUnjamCommand,
    },
    vision_align::VisionAlignCommand,
};

/// Produces the value a command should act on this cycle.
pub type Supplier<T> = Box<dyn Fn() -> T>;
