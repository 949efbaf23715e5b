//! Vision-assisted driving.

use std::{cell::RefCell, rc::Rc};

use log::{debug, warn};

use super::Supplier;
use crate::{
    command::Command,
    config::{LOOP_PERIOD, VisionAlignConfig},
    drivetrain::{DriveTrain, kinematics::curvature_drive},
    motion::pid::PidController,
    peripherals::VisionSensor,
};

/// Drives at the supplied speed while turning to centre the vision target.
///
/// The turn comes from a PID loop on the camera's horizontal offset, limited
/// to [`VisionAlignConfig::max_turn`]. With no target in view the robot
/// drives straight and the loop starts fresh when one is found.
pub struct VisionAlignCommand {
    drive:      Rc<RefCell<DriveTrain>>,
    vision:     Rc<RefCell<dyn VisionSensor>>,
    speed:      Supplier<f64>,
    pid:        PidController,
    had_target: bool,
}

impl VisionAlignCommand {
    pub fn new(
        drive: Rc<RefCell<DriveTrain>>,
        vision: Rc<RefCell<dyn VisionSensor>>,
        speed: Supplier<f64>,
        config: VisionAlignConfig,
    ) -> Self {
        Self {
            drive,
            vision,
            speed,
            pid: PidController::new(config.pid, LOOP_PERIOD.as_secs_f64(), config.max_turn),
            had_target: false,
        }
    }

    fn turn(&mut self) -> f64 {
        let offset = self.vision.borrow_mut().horizontal_offset();
        match offset {
            Some(offset) if offset.is_finite() => {
                if !self.had_target {
                    debug!("Vision target acquired at {:.1} deg", offset);
                }
                self.had_target = true;
                // positive offset means the target is to the right
                self.pid.calculate(offset, 0.0)
            }
            _ => {
                if self.had_target {
                    debug!("Vision target lost");
                    self.pid.reset();
                }
                self.had_target = false;
                0.0
            }
        }
    }
}

impl Command for VisionAlignCommand {
    fn name(&self) -> &str { "VisionAlign" }

    fn initialize(&mut self) {
        self.pid.reset();
        self.had_target = false;
    }

    fn execute(&mut self) {
        let turn = self.turn();
        let signal = curvature_drive((self.speed)(), turn, true);
        self.drive
            .borrow_mut()
            .set_percent_output(signal)
            .unwrap_or_else(|e| {
                warn!("Vision Align Drive Error: {}", e);
            });
    }

    fn end(&mut self, _interrupted: bool) {
        self.drive.borrow_mut().neutral_output().unwrap_or_else(|e| {
            warn!("Drive Neutral Error: {}", e);
        });
    }
}
