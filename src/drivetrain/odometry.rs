//! Robot state estimation from drive encoders.
//!
//! Each cycle the drivetrain reports how far each side turned since the last
//! cycle. Treating that short stretch as an arc, the heading change is the
//! difference of the two sides over the track width, and the robot moves the
//! mean distance along the average of the old and new headings.

use std::f64::consts::PI;

/// A 2D position with heading. Metres, and radians counter-clockwise from
/// the starting direction.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, t: f64) -> Self { Self { x, y, t } }

    /// The pose the robot starts every match in.
    pub const fn origin() -> Self { Self::new(0.0, 0.0, 0.0) }
}

/// Integrates wheel rotations into a [`Pose`].
#[derive(Debug, Clone)]
pub struct Odometry {
    wheel_radius: f64,
    track_width:  f64,
    pose:         Pose,
}

impl Odometry {
    /// Creates an estimator starting at the origin.
    pub fn new(wheel_radius: f64, track_width: f64) -> Self {
        Self {
            wheel_radius,
            track_width,
            pose: Pose::origin(),
        }
    }

    /// The current estimate.
    pub const fn pose(&self) -> Pose { self.pose }

    /// Overrides the current estimate.
    pub fn reset(&mut self, pose: Pose) { self.pose = pose; }

    /// Advances the estimate by one cycle of wheel motion, in rotations.
    pub fn update(&mut self, left_delta_rotation: f64, right_delta_rotation: f64) -> Pose {
        let circumference = 2.0 * PI * self.wheel_radius;
        let left = left_delta_rotation * circumference;
        let right = right_delta_rotation * circumference;

        let distance = (left + right) / 2.0;
        let delta_t = (right - left) / self.track_width;
        let avg_t = self.pose.t + delta_t / 2.0;

        self.pose.x += distance * avg_t.cos();
        self.pose.y += distance * avg_t.sin();
        self.pose.t = wrap_angle(self.pose.t + delta_t);
        self.pose
    }
}

// (-pi, pi]
fn wrap_angle(t: f64) -> f64 {
    let wrapped = (t + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI { PI } else { wrapped }
}
