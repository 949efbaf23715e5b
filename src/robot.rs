//! The assembled robot.
//!
//! [`Robot`] holds one shared handle to every subsystem. [`Robot::teleop`]
//! builds the driver-control command set on top of them and registers it with
//! a [`Scheduler`].

use std::{cell::RefCell, rc::Rc};

use log::info;

use crate::{
    command::{Command, CommandId, Scheduler},
    commands::{
        ClimbSpeedCommand, ControlPanelCommand, FlywheelSpeedCommand, KinematicsDriveCommand,
        PercentDriveCommand, PowerCellFeedCommand, PowerCellUnjamCommand, Supplier,
        VisionAlignCommand, single,
    },
    config::{TeleopConfig, VisionAlignConfig},
    drivetrain::DriveTrain,
    opcontrol::{
        inputs::{OperatorInputs, SharedInputs, shared_inputs},
        teleop::{TeleopCommand, TeleopCommands},
    },
    peripherals::{VisionSensor, controller::ControllerSource},
    subsystems::{Climber, ControlPanelSpinner, Feeder, Flywheel, Intake},
};

/// Every subsystem on the robot, shared.
#[derive(Clone)]
pub struct Robot {
    pub drive:         Rc<RefCell<DriveTrain>>,
    pub flywheel:      Rc<RefCell<Flywheel>>,
    pub feeder:        Rc<RefCell<Feeder>>,
    pub climber:       Rc<RefCell<Climber>>,
    pub intake:        Rc<RefCell<Intake>>,
    pub control_panel: Rc<RefCell<ControlPanelSpinner>>,
    pub vision:        Rc<RefCell<dyn VisionSensor>>,
}

impl Robot {
    /// Registers the driver-control commands with `scheduler` and returns the
    /// teleop command. Scheduling that command starts driver control.
    pub fn teleop(
        &self,
        scheduler: &mut Scheduler,
        driver: Box<dyn ControllerSource>,
        operator: Box<dyn ControllerSource>,
        config: TeleopConfig,
        vision_config: VisionAlignConfig,
    ) -> CommandId {
        let inputs = shared_inputs();

        let curvature_drive: Box<dyn Command> = if config.use_kinematics_drive {
            Box::new(KinematicsDriveCommand::new(
                self.drive.clone(),
                read(&inputs, |i| i.x_speed),
                read(&inputs, |i| i.z_rotation),
                read(&inputs, |i| i.quick_turn),
            ))
        } else {
            Box::new(PercentDriveCommand::new(
                self.drive.clone(),
                read(&inputs, |i| i.x_speed),
                read(&inputs, |i| i.z_rotation),
                read(&inputs, |i| i.quick_turn),
            ))
        };

        let commands = TeleopCommands {
            curvature_drive:         scheduler.register_boxed(curvature_drive),
            vision_align:            scheduler.register(VisionAlignCommand::new(
                self.drive.clone(),
                self.vision.clone(),
                read(&inputs, |i| i.vision_align_speed),
                vision_config,
            )),
            control_panel:           scheduler.register(ControlPanelCommand::new(
                self.control_panel.clone(),
                read(&inputs, |i| i.control_panel_speed),
            )),
            feed:                    scheduler.register(PowerCellFeedCommand::new(
                self.feeder.clone(),
                read(&inputs, |i| i.feed_speed),
            )),
            unjam:                   scheduler.register(PowerCellUnjamCommand::new(
                self.feeder.clone(),
                read(&inputs, |i| i.unjam_speed),
            )),
            flywheel_speed:          scheduler.register(FlywheelSpeedCommand::new(
                self.flywheel.clone(),
                read(&inputs, |i| i.far_shot_rpm),
            )),
            climb_speed:             scheduler.register(ClimbSpeedCommand::new(
                self.climber.clone(),
                read(&inputs, |i| i.climb_speed),
            )),
            robot_state_estimation:  scheduler
                .register(single::robot_state_estimation(self.drive.clone())),
            set_low_gear:            scheduler
                .register(single::set_drive_low_gear(self.drive.clone())),
            set_high_gear:           scheduler
                .register(single::set_drive_high_gear(self.drive.clone())),
            lock_hanging_climber:    scheduler
                .register(single::lock_hanging_climber(self.climber.clone())),
            intake_extension_toggle: scheduler
                .register(single::intake_extension_toggle(self.intake.clone())),
            flywheel_hood_toggle:    scheduler
                .register(single::flywheel_hood_toggle(self.flywheel.clone())),
        };

        let teleop =
            TeleopCommand::new(scheduler.handle(), commands, driver, operator, config, inputs);
        let id = scheduler.register(teleop);
        info!(
            "Teleop registered as {} ({} drive)",
            id,
            if config.use_kinematics_drive { "kinematics" } else { "percent" }
        );
        id
    }
}

// a supplier for one field of the shared inputs
fn read<T: 'static>(inputs: &SharedInputs, field: fn(&OperatorInputs) -> T) -> Supplier<T> {
    let inputs = inputs.clone();
    Box::new(move || field(&inputs.get()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DrivetrainConfig,
        drivetrain::Gear,
        peripherals::{Solenoid, controller::RawControllerState, make_cloneable},
        testing::{
            DriveCall, MockMotor, MockSolenoid, MockVision, MotorOutput, RecordingDriveTrain,
            SharedController,
        },
    };

    struct Rig {
        robot:     Robot,
        scheduler: Scheduler,
        teleop:    CommandId,
        driver:    SharedController,
        operator:  SharedController,
        variant:   RecordingDriveTrain,
        flywheel:  MockMotor,
        feeder:    MockMotor,
        winch:     MockMotor,
        extension: MockSolenoid,
        lock:      MockSolenoid,
        vision:    MockVision,
    }

    fn rig(config: TeleopConfig) -> Rig {
        let variant = RecordingDriveTrain::default();
        let flywheel = MockMotor::default();
        let feeder = MockMotor::default();
        let winch = MockMotor::default();
        let extension = MockSolenoid::default();
        let lock = MockSolenoid::default();
        let vision = MockVision::default();

        let vision_sensor: Rc<RefCell<dyn VisionSensor>> = make_cloneable(vision.clone());
        let robot = Robot {
            drive: make_cloneable(DriveTrain::new(
                Box::new(variant.clone()),
                Box::new(MockSolenoid::default()),
                DrivetrainConfig::default(),
            )),
            flywheel: make_cloneable(Flywheel::new(
                Box::new(flywheel.clone()),
                Box::new(MockSolenoid::default()),
            )),
            feeder: make_cloneable(Feeder::new(Box::new(feeder.clone()))),
            climber: make_cloneable(Climber::new(Box::new(winch.clone()), Box::new(lock.clone()))),
            intake: make_cloneable(Intake::new(Box::new(extension.clone()))),
            control_panel: make_cloneable(ControlPanelSpinner::new(Box::new(MockMotor::default()))),
            vision: vision_sensor,
        };

        let driver = SharedController::default();
        let operator = SharedController::default();
        let mut scheduler = Scheduler::new();
        let teleop = robot.teleop(
            &mut scheduler,
            Box::new(driver.clone()),
            Box::new(operator.clone()),
            config,
            VisionAlignConfig::default(),
        );

        Rig {
            robot,
            scheduler,
            teleop,
            driver,
            operator,
            variant,
            flywheel,
            feeder,
            winch,
            extension,
            lock,
            vision,
        }
    }

    #[test]
    fn teleop_starts_default_commands() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);

        let names: Vec<_> = rig
            .scheduler
            .scheduled()
            .iter()
            .filter_map(|id| rig.scheduler.name(*id))
            .collect();
        assert_eq!(
            names,
            vec![
                "Teleop",
                "SetDriveLowGear",
                "PercentDrive",
                "ControlPanel",
                "FlywheelSpeed",
                "ClimbSpeed",
                "RobotStateEstimation",
            ]
        );
        assert_eq!(rig.robot.drive.borrow().gear(), Gear::Low);

        // the instant gear shift finishes on the first cycle
        rig.scheduler.run();
        assert!(
            !rig.scheduler
                .scheduled()
                .iter()
                .any(|id| rig.scheduler.name(*id) == Some("SetDriveLowGear"))
        );
    }

    #[test]
    fn sticks_reach_the_drivetrain() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);

        rig.driver.update(|s| s.left_y = -1.0);
        rig.scheduler.run();
        assert!(rig.variant.calls().contains(&DriveCall::Percent(1.0, 1.0)));
    }

    #[test]
    fn kinematics_drive_is_selectable() {
        let mut rig = rig(TeleopConfig {
            use_kinematics_drive: true,
            ..Default::default()
        });
        rig.scheduler.schedule(rig.teleop);
        assert!(
            rig.scheduler
                .scheduled()
                .iter()
                .any(|id| rig.scheduler.name(*id) == Some("KinematicsDrive"))
        );
    }

    #[test]
    fn vision_align_takes_over_while_a_is_held() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);
        rig.vision.set_offset(Some(0.0));

        rig.driver.update(|s| {
            s.a = true;
            s.left_y = -1.0;
        });
        rig.scheduler.run();
        rig.variant.clear();
        rig.scheduler.run();
        // half speed, target centred
        assert_eq!(rig.variant.last_call(), Some(DriveCall::Percent(0.5, 0.5)));

        rig.driver.update(|s| s.a = false);
        rig.scheduler.run();
        rig.variant.clear();
        rig.scheduler.run();
        assert_eq!(rig.variant.last_call(), Some(DriveCall::Percent(1.0, 1.0)));
    }

    #[test]
    fn triggers_feed_and_unjam() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);

        rig.driver.update(|s| s.left_trigger = 1.0);
        rig.scheduler.run();
        rig.scheduler.run();
        assert_eq!(rig.feeder.output(), Some(MotorOutput::Percent(1.0)));

        rig.driver.update(|s| {
            s.left_trigger = 0.0;
            s.right_trigger = 1.0;
        });
        rig.scheduler.run();
        rig.scheduler.run();
        assert_eq!(rig.feeder.output(), Some(MotorOutput::Percent(-1.0)));
    }

    #[test]
    fn operator_controls() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);

        rig.operator.set(RawControllerState {
            right_bumper: true,
            start: true,
            right_y: -1.0,
            ..Default::default()
        });
        rig.scheduler.run();
        assert!(rig.lock.get());
        assert_eq!(rig.flywheel.output(), Some(MotorOutput::VelocityRpm(4000.0)));
        assert_eq!(rig.winch.output(), Some(MotorOutput::Percent(-1.0)));

        rig.driver.update(|s| s.b = true);
        rig.scheduler.run();
        assert!(rig.extension.get());
    }

    #[test]
    fn cancel_all_stops_mechanisms() {
        let mut rig = rig(TeleopConfig::default());
        rig.scheduler.schedule(rig.teleop);
        rig.scheduler.run();

        rig.scheduler.cancel_all();
        assert!(rig.scheduler.scheduled().is_empty());
        assert_eq!(rig.variant.last_call(), Some(DriveCall::Neutral));
        assert_eq!(rig.flywheel.output(), Some(MotorOutput::Neutral));
        assert_eq!(rig.winch.output(), Some(MotorOutput::Neutral));
    }
}
