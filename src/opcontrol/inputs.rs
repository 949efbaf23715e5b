//! Shared operator inputs.

use std::{cell::Cell, rc::Rc};

use crate::config::FarShotConfig;

/// Everything the teleop commands read from the driver and operator,
/// already shaped (deadbands, scaling) for direct use.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OperatorInputs {
    pub x_speed:             f64,
    pub z_rotation:          f64,
    pub quick_turn:          bool,
    pub vision_align_speed:  f64,
    pub feed_speed:          f64,
    pub unjam_speed:         f64,
    pub climb_speed:         f64,
    pub control_panel_speed: f64,
    /// `None` until the operator first asks for a far shot.
    pub far_shot_rpm:        Option<u32>,
}

/// Written by the teleop command, read by everything it schedules.
pub type SharedInputs = Rc<Cell<OperatorInputs>>;

/// Creates a neutral set of inputs to share.
pub fn shared_inputs() -> SharedInputs { Rc::new(Cell::new(OperatorInputs::default())) }

/// The operator's far-shot flywheel request.
///
/// Starts with no request. The first step in either direction requests the
/// minimum; after that each step moves by `step_rpm`, clamped to the
/// configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarShotRpm {
    config: FarShotConfig,
    rpm:    Option<u32>,
}

impl FarShotRpm {
    pub const fn new(config: FarShotConfig) -> Self { Self { config, rpm: None } }

    pub const fn rpm(&self) -> Option<u32> { self.rpm }

    pub fn decrease(&mut self) -> u32 {
        let FarShotConfig {
            min_rpm, step_rpm, ..
        } = self.config;
        let rpm = match self.rpm {
            Some(rpm) => rpm.saturating_sub(step_rpm).max(min_rpm),
            None => min_rpm,
        };
        self.rpm = Some(rpm);
        rpm
    }

    pub fn increase(&mut self) -> u32 {
        let FarShotConfig {
            min_rpm,
            max_rpm,
            step_rpm,
        } = self.config;
        let rpm = match self.rpm {
            Some(rpm) => rpm.saturating_add(step_rpm).min(max_rpm),
            None => min_rpm,
        };
        self.rpm = Some(rpm);
        rpm
    }
}
