//! Robot mechanisms other than the drivetrain.
//!
//! Each subsystem owns its hardware through the traits in
//! [`peripherals`](crate::peripherals) and is shared between commands with
//! [`make_cloneable`](crate::peripherals::make_cloneable).

/// Far-shot flywheel and its adjustable hood.
pub mod flywheel;

/// Power-cell feeder between the intake and the flywheel.
pub mod feeder;

/// Hanging climber and its lock.
pub mod climber;

/// Ground intake extension.
pub mod intake;

/// Control-panel spinner wheel.
pub mod control_panel;

pub use self::{
    climber::Climber, control_panel::ControlPanelSpinner, feeder::Feeder, flywheel::Flywheel,
    intake::Intake,
};
