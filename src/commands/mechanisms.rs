//! Commands that run a mechanism at a supplied speed until cancelled.

use std::{cell::RefCell, rc::Rc};

use log::warn;

use super::Supplier;
use crate::{
    command::Command,
    subsystems::{Climber, ControlPanelSpinner, Feeder, Flywheel},
};

/// Spins the control panel wheel.
pub struct ControlPanelCommand {
    spinner: Rc<RefCell<ControlPanelSpinner>>,
    speed:   Supplier<f64>,
}

impl ControlPanelCommand {
    pub fn new(spinner: Rc<RefCell<ControlPanelSpinner>>, speed: Supplier<f64>) -> Self {
        Self { spinner, speed }
    }
}

impl Command for ControlPanelCommand {
    fn name(&self) -> &str { "ControlPanel" }

    fn execute(&mut self) {
        self.spinner
            .borrow_mut()
            .set_speed((self.speed)())
            .unwrap_or_else(|e| {
                warn!("Control Panel Error: {}", e);
            });
    }

    fn end(&mut self, _interrupted: bool) {
        self.spinner.borrow_mut().stop().unwrap_or_else(|e| {
            warn!("Control Panel Stop Error: {}", e);
        });
    }
}

/// Feeds power cells into the shooter.
pub struct PowerCellFeedCommand {
    feeder: Rc<RefCell<Feeder>>,
    speed:  Supplier<f64>,
}

impl PowerCellFeedCommand {
    pub fn new(feeder: Rc<RefCell<Feeder>>, speed: Supplier<f64>) -> Self { Self { feeder, speed } }
}

impl Command for PowerCellFeedCommand {
    fn name(&self) -> &str { "PowerCellFeed" }

    fn execute(&mut self) { run_feeder(&self.feeder, (self.speed)()); }

    fn end(&mut self, _interrupted: bool) { stop_feeder(&self.feeder); }
}

/// Runs the feeder backwards to clear a jam.
pub struct PowerCellUnjamCommand {
    feeder: Rc<RefCell<Feeder>>,
    speed:  Supplier<f64>,
}

impl PowerCellUnjamCommand {
    pub fn new(feeder: Rc<RefCell<Feeder>>, speed: Supplier<f64>) -> Self { Self { feeder, speed } }
}

impl Command for PowerCellUnjamCommand {
    fn name(&self) -> &str { "PowerCellUnjam" }

    fn execute(&mut self) { run_feeder(&self.feeder, -(self.speed)()); }

    fn end(&mut self, _interrupted: bool) { stop_feeder(&self.feeder); }
}

fn run_feeder(feeder: &Rc<RefCell<Feeder>>, speed: f64) {
    feeder.borrow_mut().set_speed(speed).unwrap_or_else(|e| {
        warn!("Feeder Error: {}", e);
    });
}

fn stop_feeder(feeder: &Rc<RefCell<Feeder>>) {
    feeder.borrow_mut().stop().unwrap_or_else(|e| {
        warn!("Feeder Stop Error: {}", e);
    });
}

/// Holds the flywheel at the requested speed, or idles it.
pub struct FlywheelSpeedCommand {
    flywheel: Rc<RefCell<Flywheel>>,
    rpm:      Supplier<Option<u32>>,
}

impl FlywheelSpeedCommand {
    pub fn new(flywheel: Rc<RefCell<Flywheel>>, rpm: Supplier<Option<u32>>) -> Self {
        Self { flywheel, rpm }
    }
}

impl Command for FlywheelSpeedCommand {
    fn name(&self) -> &str { "FlywheelSpeed" }

    fn execute(&mut self) {
        self.flywheel
            .borrow_mut()
            .set_target_rpm((self.rpm)())
            .unwrap_or_else(|e| {
                warn!("Flywheel Error: {}", e);
            });
    }

    fn end(&mut self, _interrupted: bool) {
        self.flywheel
            .borrow_mut()
            .set_target_rpm(None)
            .unwrap_or_else(|e| {
                warn!("Flywheel Stop Error: {}", e);
            });
    }
}

/// Runs the climber winch.
pub struct ClimbSpeedCommand {
    climber: Rc<RefCell<Climber>>,
    speed:   Supplier<f64>,
}

impl ClimbSpeedCommand {
    pub fn new(climber: Rc<RefCell<Climber>>, speed: Supplier<f64>) -> Self {
        Self { climber, speed }
    }
}

impl Command for ClimbSpeedCommand {
    fn name(&self) -> &str { "ClimbSpeed" }

    fn execute(&mut self) {
        self.climber
            .borrow_mut()
            .set_speed((self.speed)())
            .unwrap_or_else(|e| {
                warn!("Climber Error: {}", e);
            });
    }

    fn end(&mut self, _interrupted: bool) {
        self.climber.borrow_mut().stop().unwrap_or_else(|e| {
            warn!("Climber Stop Error: {}", e);
        });
    }
}
