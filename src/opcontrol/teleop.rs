//! The teleop dispatch command.
//!
//! Nothing here moves hardware. [`TeleopCommand`] watches both controllers
//! and decides which commands should be running:
//!
//! | Input                         | Pressed                     | Released                    |
//! |-------------------------------|-----------------------------|-----------------------------|
//! | driver right bumper           | high gear                   | low gear                    |
//! | driver A                      | curvature drive -> vision   | vision -> curvature drive   |
//! | driver B                      | toggle intake extension     |                             |
//! | driver left trigger past 0.3  | unjam -> feed               |                             |
//! | driver right trigger past 0.3 | feed -> unjam               |                             |
//! | operator B                    | toggle flywheel hood        |                             |
//! | operator start                | lock hanging climber        |                             |
//! | operator left/right bumper    | far-shot rpm down/up        |                             |
//!
//! Continuous values (drive sticks, trigger depth, climb stick) are published
//! through [`SharedInputs`] for the running commands to read.

use log::{debug, info};

use super::inputs::{FarShotRpm, OperatorInputs, SharedInputs};
use crate::{
    command::{Command, CommandId, CommandScheduler},
    config::TeleopConfig,
    motion::{latch::LatchedBoolean, util::apply_deadband},
    peripherals::controller::{ControllerSource, XboxController},
};

/// Every command the teleop dispatch starts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleopCommands {
    pub curvature_drive:         CommandId,
    pub vision_align:            CommandId,
    pub control_panel:           CommandId,
    pub feed:                    CommandId,
    pub unjam:                   CommandId,
    pub flywheel_speed:          CommandId,
    pub climb_speed:             CommandId,
    pub robot_state_estimation:  CommandId,
    pub set_low_gear:            CommandId,
    pub set_high_gear:           CommandId,
    pub lock_hanging_climber:    CommandId,
    pub intake_extension_toggle: CommandId,
    pub flywheel_hood_toggle:    CommandId,
}

/// Maps controller input to command scheduling during driver control.
pub struct TeleopCommand<S: CommandScheduler> {
    scheduler: S,
    commands:  TeleopCommands,
    config:    TeleopConfig,

    driver:          XboxController,
    operator:        XboxController,
    driver_source:   Box<dyn ControllerSource>,
    operator_source: Box<dyn ControllerSource>,

    feed_threshold_latch:  LatchedBoolean,
    unjam_threshold_latch: LatchedBoolean,
    far_shot:              FarShotRpm,

    inputs: SharedInputs,
}

impl<S: CommandScheduler> TeleopCommand<S> {
    pub fn new(
        scheduler: S,
        commands: TeleopCommands,
        driver_source: Box<dyn ControllerSource>,
        operator_source: Box<dyn ControllerSource>,
        config: TeleopConfig,
        inputs: SharedInputs,
    ) -> Self {
        Self {
            scheduler,
            commands,
            driver: XboxController::new(config.driver_port),
            operator: XboxController::new(config.operator_port),
            driver_source,
            operator_source,
            feed_threshold_latch: LatchedBoolean::new(),
            unjam_threshold_latch: LatchedBoolean::new(),
            far_shot: FarShotRpm::new(config.far_shot),
            config,
            inputs,
        }
    }

    /// The far-shot rpm the operator has asked for, if any.
    pub const fn wanted_far_shot_rpm(&self) -> Option<u32> { self.far_shot.rpm() }

    pub const fn driver(&self) -> &XboxController { &self.driver }

    pub const fn operator(&self) -> &XboxController { &self.operator }

    fn x_speed(&self) -> f64 { apply_deadband(-self.driver.left_y, self.config.x_speed_deadband) }

    fn z_rotation(&self) -> f64 {
        apply_deadband(self.driver.right_x, self.config.z_rotation_deadband)
    }

    /// The values the scheduled commands act on this cycle.
    pub fn operator_inputs(&self) -> OperatorInputs {
        let x_speed = self.x_speed();
        OperatorInputs {
            x_speed,
            z_rotation: self.z_rotation(),
            quick_turn: self.driver.left_bumper.is_held_down(),
            vision_align_speed: x_speed * self.config.vision_speed_scale,
            feed_speed: apply_deadband(self.driver.left_trigger, self.config.trigger_deadband),
            unjam_speed: apply_deadband(self.driver.right_trigger, self.config.trigger_deadband),
            climb_speed: apply_deadband(self.operator.right_y, self.config.climb_deadband),
            control_panel_speed: self.operator.left_trigger,
            far_shot_rpm: self.far_shot.rpm(),
        }
    }

    fn dispatch_driver(&mut self) {
        let c = self.commands;

        if self.driver.right_bumper.is_pressed() {
            self.scheduler.schedule(c.set_high_gear);
        } else if self.driver.right_bumper.is_released() {
            self.scheduler.schedule(c.set_low_gear);
        }

        if self.driver.a_button.is_pressed() {
            debug!("Vision align engaged");
            self.scheduler.cancel(c.curvature_drive);
            self.scheduler.schedule(c.vision_align);
        } else if self.driver.a_button.is_released() {
            debug!("Vision align released");
            self.scheduler.cancel(c.vision_align);
            self.scheduler.schedule(c.curvature_drive);
        }

        if self.driver.b_button.is_pressed() {
            self.scheduler.schedule(c.intake_extension_toggle);
        }

        let threshold = self.config.trigger_threshold;
        if self
            .feed_threshold_latch
            .update(self.driver.left_trigger > threshold)
        {
            debug!("Feeding power cells");
            self.scheduler.cancel(c.unjam);
            self.scheduler.schedule(c.feed);
        }
        if self
            .unjam_threshold_latch
            .update(self.driver.right_trigger > threshold)
        {
            debug!("Unjamming power cells");
            self.scheduler.cancel(c.feed);
            self.scheduler.schedule(c.unjam);
        }
    }

    fn dispatch_operator(&mut self) {
        let c = self.commands;

        if self.operator.b_button.is_pressed() {
            self.scheduler.schedule(c.flywheel_hood_toggle);
        }
        if self.operator.start_button.is_pressed() {
            self.scheduler.schedule(c.lock_hanging_climber);
        }

        if self.operator.left_bumper.is_pressed() {
            let rpm = self.far_shot.decrease();
            info!("Far shot rpm {}", rpm);
        }
        if self.operator.right_bumper.is_pressed() {
            let rpm = self.far_shot.increase();
            info!("Far shot rpm {}", rpm);
        }
    }
}

impl<S: CommandScheduler> Command for TeleopCommand<S> {
    fn name(&self) -> &str { "Teleop" }

    fn initialize(&mut self) {
        let c = self.commands;
        for id in [
            c.set_low_gear,
            c.curvature_drive,
            c.control_panel,
            c.flywheel_speed,
            c.climb_speed,
            c.robot_state_estimation,
        ] {
            self.scheduler.schedule(id);
        }
    }

    fn execute(&mut self) {
        self.driver
            .collect_controller_data(self.driver_source.as_mut());
        self.operator
            .collect_controller_data(self.operator_source.as_mut());

        self.dispatch_driver();
        self.dispatch_operator();

        self.inputs.set(self.operator_inputs());
    }
}
