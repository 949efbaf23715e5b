//! Stick-to-wheel mixing for a differential drivetrain.
//!
//! Teleop drive is "curvature" style: the rotation stick sets how sharply the
//! robot curves rather than how fast it spins, so steering feels the same at
//! any speed. Holding quick turn switches to spinning in place.

/// Per-side output, either percent in `[-1, 1]` or anything that mixes the
/// same way.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DriveSignal {
    pub left:  f64,
    pub right: f64,
}

impl DriveSignal {
    /// Both sides stopped.
    pub const NEUTRAL: Self = Self::new(0.0, 0.0);

    pub const fn new(left: f64, right: f64) -> Self { Self { left, right } }

    /// Scales both sides down together so neither exceeds full output.
    /// Signals that already fit are returned untouched.
    pub fn normalized(self) -> Self {
        let max = self.left.abs().max(self.right.abs());
        if max > 1.0 {
            Self::new(self.left / max, self.right / max)
        } else {
            self
        }
    }
}

/// Mixes a forward speed and a curvature into side outputs.
///
/// * `x_speed` - Forward speed in `[-1, 1]`.
/// * `z_rotation` - Curvature, positive turns clockwise (right).
/// * `quick_turn` - Turn in place: rotation is applied without being scaled
///   by speed.
pub fn curvature_drive(x_speed: f64, z_rotation: f64, quick_turn: bool) -> DriveSignal {
    let x_speed = x_speed.clamp(-1.0, 1.0);
    let z_rotation = z_rotation.clamp(-1.0, 1.0);

    let angular = if quick_turn {
        z_rotation
    } else {
        x_speed.abs() * z_rotation
    };

    DriveSignal::new(x_speed + angular, x_speed - angular).normalized()
}

/// Wheel velocities in rotations per second.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WheelSpeeds {
    pub left_rps:  f64,
    pub right_rps: f64,
}

impl WheelSpeeds {
    /// Converts a percent signal into wheel speeds given the top speed.
    pub fn from_signal(signal: DriveSignal, max_velocity_rps: f64) -> Self {
        let signal = signal.normalized();
        Self {
            left_rps:  signal.left * max_velocity_rps,
            right_rps: signal.right * max_velocity_rps,
        }
    }

    /// Feed-forward voltage for each side, `(left, right)`.
    pub fn feedforward(&self, ks: f64, kv: f64) -> (f64, f64) {
        (
            feedforward_volts(ks, kv, self.left_rps),
            feedforward_volts(ks, kv, self.right_rps),
        )
    }
}

/// `V = kS·sign(ω) + kV·ω`, with no static term when standing still.
pub fn feedforward_volts(ks: f64, kv: f64, velocity_rps: f64) -> f64 {
    if velocity_rps == 0.0 {
        0.0
    } else {
        ks * velocity_rps.signum() + kv * velocity_rps
    }
}
