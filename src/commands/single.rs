//! Commands that wrap a single subsystem call.
//!
//! Everything here except [`robot_state_estimation`] is instant: it acts once
//! when scheduled and finishes on the next cycle.

use std::{cell::RefCell, rc::Rc};

use log::{info, warn};

use crate::{
    command::FunctionalCommand,
    drivetrain::DriveTrain,
    subsystems::{Climber, Flywheel, Intake},
};

/// Folds each cycle's wheel motion into the pose estimate, until cancelled.
pub fn robot_state_estimation(drive: Rc<RefCell<DriveTrain>>) -> FunctionalCommand {
    FunctionalCommand::run("RobotStateEstimation", move || {
        drive
            .borrow_mut()
            .update_robot_state_estimation()
            .map(|_| ())
            .unwrap_or_else(|e| {
                warn!("Odometry Error: {}", e);
            });
    })
}

pub fn set_drive_low_gear(drive: Rc<RefCell<DriveTrain>>) -> FunctionalCommand {
    FunctionalCommand::instant("SetDriveLowGear", move || {
        drive.borrow_mut().set_low_gear().unwrap_or_else(|e| {
            warn!("Shift Error: {}", e);
        });
    })
}

pub fn set_drive_high_gear(drive: Rc<RefCell<DriveTrain>>) -> FunctionalCommand {
    FunctionalCommand::instant("SetDriveHighGear", move || {
        drive.borrow_mut().set_high_gear().unwrap_or_else(|e| {
            warn!("Shift Error: {}", e);
        });
    })
}

pub fn lock_hanging_climber(climber: Rc<RefCell<Climber>>) -> FunctionalCommand {
    FunctionalCommand::instant("LockHangingClimber", move || {
        climber.borrow_mut().lock().unwrap_or_else(|e| {
            warn!("Climber Lock Error: {}", e);
        });
    })
}

pub fn intake_extension_toggle(intake: Rc<RefCell<Intake>>) -> FunctionalCommand {
    FunctionalCommand::instant("IntakeExtensionToggle", move || {
        match intake.borrow_mut().toggle_extension() {
            Ok(extended) => info!("Intake {}", if extended { "extended" } else { "retracted" }),
            Err(e) => warn!("Intake Error: {}", e),
        }
    })
}

pub fn flywheel_hood_toggle(flywheel: Rc<RefCell<Flywheel>>) -> FunctionalCommand {
    FunctionalCommand::instant("FlywheelHoodToggle", move || {
        match flywheel.borrow_mut().toggle_hood() {
            Ok(up) => info!("Flywheel hood {}", if up { "up" } else { "down" }),
            Err(e) => warn!("Flywheel Hood Error: {}", e),
        }
    })
}
