//! Match lifecycle on the V5 Brain.
//!
//! # Example
//!
//! ```ignore
//! use powercell::{
//!     command::Scheduler,
//!     competition::CompetitionRobot,
//!     config::{TeleopConfig, VisionAlignConfig},
//!     fs::logger,
//!     peripherals::vex::VexController,
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(log::LevelFilter::Info).ok();
//!     let driver = VexController::new(peripherals.primary_controller);
//!     let operator = VexController::new(peripherals.partner_controller);
//!     // motors, solenoids and vision wired from the remaining ports
//!     let robot = build_robot(
//!         [peripherals.port_1, peripherals.port_2, peripherals.port_3, peripherals.port_4],
//!         peripherals.adi_a,
//!     );
//!
//!     let mut scheduler = Scheduler::new();
//!     let teleop = robot.teleop(
//!         &mut scheduler,
//!         Box::new(driver),
//!         Box::new(operator),
//!         TeleopConfig::default(),
//!         VisionAlignConfig::default(),
//!     );
//!     CompetitionRobot::new(scheduler, teleop).compete().await;
//! }
//! ```

use log::info;
use vexide::{competition::Compete, time::sleep};

use crate::{
    command::{CommandId, Scheduler},
    config::LOOP_PERIOD,
};

/// Runs the command scheduler during driver control.
pub struct CompetitionRobot {
    scheduler: Scheduler,
    teleop:    CommandId,
}

impl CompetitionRobot {
    pub fn new(scheduler: Scheduler, teleop: CommandId) -> Self { Self { scheduler, teleop } }
}

impl Compete for CompetitionRobot {
    async fn disabled(&mut self) {
        info!("Disabled");
        self.scheduler.cancel_all();
    }

    async fn autonomous(&mut self) {
        info!("Autonomous");
        self.scheduler.cancel_all();
    }

    async fn driver(&mut self) {
        info!("Driver control");
        self.scheduler.cancel_all();
        self.scheduler.schedule(self.teleop);
        loop {
            self.scheduler.run();
            sleep(LOOP_PERIOD).await;
        }
    }
}
