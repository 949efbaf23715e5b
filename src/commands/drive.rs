//! Teleop drive commands.
//!
//! Both commands mix the same inputs with
//! [`curvature_drive`](crate::drivetrain::kinematics::curvature_drive). They
//! differ only in how the result reaches the motors: percent output, or wheel
//! velocities with feed-forward for the controllers' velocity loops.

use std::{cell::RefCell, rc::Rc};

use log::warn;

use super::Supplier;
use crate::{
    command::Command,
    drivetrain::{
        DriveTrain,
        kinematics::{WheelSpeeds, curvature_drive},
    },
};

/// Open-loop curvature drive.
pub struct PercentDriveCommand {
    drive:      Rc<RefCell<DriveTrain>>,
    x_speed:    Supplier<f64>,
    z_rotation: Supplier<f64>,
    quick_turn: Supplier<bool>,
}

impl PercentDriveCommand {
    pub fn new(
        drive: Rc<RefCell<DriveTrain>>,
        x_speed: Supplier<f64>,
        z_rotation: Supplier<f64>,
        quick_turn: Supplier<bool>,
    ) -> Self {
        Self {
            drive,
            x_speed,
            z_rotation,
            quick_turn,
        }
    }
}

impl Command for PercentDriveCommand {
    fn name(&self) -> &str { "PercentDrive" }

    fn execute(&mut self) {
        let signal = curvature_drive((self.x_speed)(), (self.z_rotation)(), (self.quick_turn)());
        self.drive
            .borrow_mut()
            .set_percent_output(signal)
            .unwrap_or_else(|e| {
                warn!("Drive Percent Output Error: {}", e);
            });
    }

    fn end(&mut self, _interrupted: bool) { stop(&self.drive); }
}

/// Closed-loop curvature drive: stick position maps to wheel velocity.
pub struct KinematicsDriveCommand {
    drive:      Rc<RefCell<DriveTrain>>,
    x_speed:    Supplier<f64>,
    z_rotation: Supplier<f64>,
    quick_turn: Supplier<bool>,
}

impl KinematicsDriveCommand {
    pub fn new(
        drive: Rc<RefCell<DriveTrain>>,
        x_speed: Supplier<f64>,
        z_rotation: Supplier<f64>,
        quick_turn: Supplier<bool>,
    ) -> Self {
        Self {
            drive,
            x_speed,
            z_rotation,
            quick_turn,
        }
    }
}

impl Command for KinematicsDriveCommand {
    fn name(&self) -> &str { "KinematicsDrive" }

    fn execute(&mut self) {
        let signal = curvature_drive((self.x_speed)(), (self.z_rotation)(), (self.quick_turn)());
        let mut drive = self.drive.borrow_mut();
        let speeds = WheelSpeeds::from_signal(signal, drive.config().max_velocity_rps);
        drive.set_wheel_speeds(speeds).unwrap_or_else(|e| {
            warn!("Drive Velocity Error: {}", e);
        });
    }

    fn end(&mut self, _interrupted: bool) { stop(&self.drive); }
}

fn stop(drive: &Rc<RefCell<DriveTrain>>) {
    drive.borrow_mut().neutral_output().unwrap_or_else(|e| {
        warn!("Drive Neutral Error: {}", e);
    });
}
