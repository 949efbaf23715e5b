//! Robot configuration.
//!
//! Every tunable the teleop wiring reads lives here as a plain struct with a
//! [`Default`] matching the competition robot, so a program only spells out
//! what it changes:
//!
//! ```
//! use powercell::config::TeleopConfig;
//!
//! let config = TeleopConfig {
//!     use_kinematics_drive: true,
//!     ..Default::default()
//! };
//! assert_eq!(config.far_shot.min_rpm, 4000);
//! ```

use std::time::Duration;

use crate::motion::pid::Pid;

/// Control loop period shared by the scheduler and rate-dependent helpers.
pub const LOOP_PERIOD: Duration = Duration::from_millis(20);

/// Bounds and step size for the operator's far-shot flywheel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarShotConfig {
    pub min_rpm:  u32,
    pub max_rpm:  u32,
    pub step_rpm: u32,
}

impl Default for FarShotConfig {
    fn default() -> Self {
        Self {
            min_rpm:  4000,
            max_rpm:  8000,
            step_rpm: 200,
        }
    }
}

/// Driver-control input mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleopConfig {
    /// Driver-station port of the driver's controller.
    pub driver_port:   u8,
    /// Driver-station port of the operator's controller.
    pub operator_port: u8,

    pub x_speed_deadband:    f64,
    pub z_rotation_deadband: f64,
    /// Deadband applied to the feed and unjam triggers.
    pub trigger_deadband:    f64,
    /// How far a trigger must be pulled before feed or unjam is scheduled.
    /// The left trigger feeds and the right trigger unjams, each through its
    /// own latch, so a jam is cleared by pulling the right trigger while
    /// feeding.
    pub trigger_threshold:   f64,
    pub climb_deadband:      f64,
    /// Vision align drives at this fraction of the driver's x speed.
    pub vision_speed_scale:  f64,

    /// Drive with closed-loop wheel velocities instead of percent output.
    pub use_kinematics_drive: bool,

    pub far_shot: FarShotConfig,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            driver_port:          0,
            operator_port:        1,
            x_speed_deadband:     0.2,
            z_rotation_deadband:  0.15,
            trigger_deadband:     0.3,
            trigger_threshold:    0.3,
            climb_deadband:       0.5,
            vision_speed_scale:   0.5,
            use_kinematics_drive: false,
            far_shot:             FarShotConfig::default(),
        }
    }
}

/// Physical constants of the drivetrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivetrainConfig {
    /// Wheel radius in metres.
    pub wheel_radius:     f64,
    /// Distance between the left and right wheel contact patches in metres.
    pub track_width:      f64,
    /// Wheel speed at full stick in rotations per second.
    pub max_velocity_rps: f64,
    /// Static friction feed-forward, volts.
    pub ks:               f64,
    /// Velocity feed-forward, volts per rotation per second.
    pub kv:               f64,
    /// Gains loaded into the motor controllers' velocity loops.
    pub velocity_pid:     Pid,
    /// Open-loop ramp from neutral to full output, seconds.
    pub ramp_seconds:     f64,
}

impl Default for DrivetrainConfig {
    fn default() -> Self {
        Self {
            wheel_radius:     0.0762,
            track_width:      0.69,
            max_velocity_rps: 4.0,
            ks:               0.2,
            kv:               2.6,
            velocity_pid:     Pid::new(0.8, 0.0, 0.0),
            ramp_seconds:     0.15,
        }
    }
}

/// Vision alignment turning loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionAlignConfig {
    /// Gains on horizontal target offset, degrees in, percent turn out.
    pub pid:      Pid,
    /// Largest turn correction, percent output.
    pub max_turn: f64,
}

impl Default for VisionAlignConfig {
    fn default() -> Self {
        Self {
            pid:      Pid::new(0.025, 0.0, 0.002),
            max_turn: 0.4,
        }
    }
}
