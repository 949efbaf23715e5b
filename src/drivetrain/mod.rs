//! Differential drivetrain control.
//!
//! This module splits the drivetrain into two layers:
//!
//! - [`DriveTrainVariant`]: the motor-controller contract. Swapping motor
//!   hardware means writing a new implementation of this trait and nothing
//!   else.
//! - [`DriveTrain`]: the subsystem the commands share. It owns a boxed variant
//!   plus the gear shifter and the robot state estimate.
//!
//! # Example
//!
//! ```ignore
//! use powercell::{
//!     config::DrivetrainConfig,
//!     drivetrain::{DriveTrain, kinematics::curvature_drive},
//!     peripherals::make_cloneable,
//! };
//!
//! let drive = make_cloneable(DriveTrain::new(
//!     Box::new(variant),
//!     Box::new(shifter),
//!     DrivetrainConfig::default(),
//! ));
//!
//! // In your control loop:
//! drive.borrow_mut().set_percent_output(curvature_drive(0.5, 0.2, false))?;
//! drive.borrow_mut().update_robot_state_estimation()?;
//! ```

/// Curvature drive mixing and wheel-speed feed-forward.
pub mod kinematics;

/// Ramped, geared drivetrain over any pair of encoder motors.
pub mod motor;

/// Pose integration from delta rotations.
pub mod odometry;

/// Drivetrain backed by vexide smart motors.
#[cfg(target_vendor = "vex")]
pub mod vex;

use log::{info, warn};

use self::{
    kinematics::{DriveSignal, WheelSpeeds},
    odometry::{Odometry, Pose},
};
use crate::{
    config::DrivetrainConfig,
    motion::pid::Pid,
    peripherals::{HardwareError, Solenoid},
};

/// Operations a drivetrain's motor controllers must support.
///
/// Every operation addresses both sides at once. Rotations are wheel-side
/// rotations; implementations fold in gearing and encoder resolution.
pub trait DriveTrainVariant {
    /// Closed-loop velocity control with an additional feed-forward voltage
    /// per side.
    fn set_velocity_pid(
        &mut self,
        left_velocity_rotations_per_second: f64,
        right_velocity_rotations_per_second: f64,
        left_voltage: f64,
        right_voltage: f64,
    ) -> Result<(), HardwareError>;

    /// Closed-loop position control to an absolute rotation per side.
    fn set_position_pid(
        &mut self,
        left_distance_rotations: f64,
        right_distance_rotations: f64,
    ) -> Result<(), HardwareError>;

    /// Loads gains into the closed-loop controllers.
    fn configure_pid(&mut self, pid: Pid) -> Result<(), HardwareError>;

    /// Limits how quickly open-loop output may change.
    fn configure_ramp_rate(
        &mut self,
        seconds_from_neutral_to_full: f64,
    ) -> Result<(), HardwareError>;

    /// Overwrites the encoder positions, usually with zero.
    fn set_encoder_position(
        &mut self,
        left_rotations: f64,
        right_rotations: f64,
    ) -> Result<(), HardwareError>;

    /// Rotations of the left side since the previous call.
    fn left_delta_rotation(&mut self) -> Result<f64, HardwareError>;

    /// Rotations of the right side since the previous call.
    fn right_delta_rotation(&mut self) -> Result<f64, HardwareError>;

    /// Stops driving both sides.
    fn neutral_output(&mut self) -> Result<(), HardwareError>;

    /// Open-loop output as a fraction of full, per side.
    fn set_percent_output(
        &mut self,
        left_percent: f64,
        right_percent: f64,
    ) -> Result<(), HardwareError>;

    /// Open-loop output in volts, per side.
    fn set_voltage(&mut self, left_voltage: f64, right_voltage: f64) -> Result<(), HardwareError>;
}

/// Transmission gear.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gear {
    /// Torque: pushing and precise driving.
    #[default]
    Low,
    /// Speed: crossing the field.
    High,
}

/// The drivetrain subsystem.
pub struct DriveTrain {
    variant:      Box<dyn DriveTrainVariant>,
    shifter:      Box<dyn Solenoid>,
    gear:         Gear,
    odometry:     Odometry,
    // left rotation already taken from the encoder but not yet integrated
    pending_left: f64,
    config:       DrivetrainConfig,
}

impl DriveTrain {
    /// Wraps a variant and shifter, loading the configured velocity gains and
    /// ramp rate. Configuration failures are logged; the drivetrain is still
    /// usable with whatever the controllers had before.
    pub fn new(
        mut variant: Box<dyn DriveTrainVariant>,
        shifter: Box<dyn Solenoid>,
        config: DrivetrainConfig,
    ) -> Self {
        variant.configure_pid(config.velocity_pid).unwrap_or_else(|e| {
            warn!("Drivetrain PID Config Error: {}", e);
        });
        variant
            .configure_ramp_rate(config.ramp_seconds)
            .unwrap_or_else(|e| {
                warn!("Drivetrain Ramp Config Error: {}", e);
            });

        Self {
            variant,
            shifter,
            gear: Gear::Low,
            odometry: Odometry::new(config.wheel_radius, config.track_width),
            pending_left: 0.0,
            config,
        }
    }

    /// The physical constants this drivetrain was built with.
    pub const fn config(&self) -> &DrivetrainConfig { &self.config }

    /// Drives open loop.
    pub fn set_percent_output(&mut self, signal: DriveSignal) -> Result<(), HardwareError> {
        self.variant.set_percent_output(signal.left, signal.right)
    }

    /// Drives closed loop at the given wheel speeds, adding feed-forward from
    /// the configured `ks` and `kv`.
    pub fn set_wheel_speeds(&mut self, speeds: WheelSpeeds) -> Result<(), HardwareError> {
        let (left_ff, right_ff) = speeds.feedforward(self.config.ks, self.config.kv);
        self.variant
            .set_velocity_pid(speeds.left_rps, speeds.right_rps, left_ff, right_ff)
    }

    /// Stops both sides.
    pub fn neutral_output(&mut self) -> Result<(), HardwareError> { self.variant.neutral_output() }

    /// The gear the shifter was last put in.
    pub const fn gear(&self) -> Gear { self.gear }

    /// Shifts into low gear.
    pub fn set_low_gear(&mut self) -> Result<(), HardwareError> { self.shift(Gear::Low) }

    /// Shifts into high gear.
    pub fn set_high_gear(&mut self) -> Result<(), HardwareError> { self.shift(Gear::High) }

    fn shift(&mut self, gear: Gear) -> Result<(), HardwareError> {
        self.shifter.set(gear == Gear::High)?;
        if self.gear != gear {
            info!("Drivetrain shifted to {:?} gear", gear);
        }
        self.gear = gear;
        Ok(())
    }

    /// Reads one cycle of wheel motion and folds it into the pose estimate.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if either side can't be read; the estimate
    /// is left untouched in that case. A left delta read before a failed
    /// right read is held and folded into the next successful update.
    pub fn update_robot_state_estimation(&mut self) -> Result<Pose, HardwareError> {
        self.pending_left += self.variant.left_delta_rotation()?;
        let right = self.variant.right_delta_rotation()?;
        let left = std::mem::take(&mut self.pending_left);
        Ok(self.odometry.update(left, right))
    }

    /// The current pose estimate.
    pub const fn robot_state(&self) -> Pose { self.odometry.pose() }

    /// Zeroes the encoders and restarts the estimate at `pose`.
    pub fn reset_robot_state(&mut self, pose: Pose) -> Result<(), HardwareError> {
        self.variant.set_encoder_position(0.0, 0.0)?;
        self.pending_left = 0.0;
        self.odometry.reset(pose);
        Ok(())
    }
}
