//! PID gains and a discrete PID controller.
//!
//! [`Pid`] is the gain set handed to motor controllers that close the loop
//! themselves (see
//! [`DriveTrainVariant::configure_pid`](crate::drivetrain::DriveTrainVariant::configure_pid)).
//! [`PidController`] closes a loop in software, one [`calculate`](PidController::calculate)
//! call per control cycle.
//!
//! The output is `kp*error + ki*integral + kd*derivative + kf*setpoint`.
//! The integral is clamped so that the `ki` term alone can never exceed the
//! output limit.

/// PID and feed-forward gains.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pid {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// Feed-forward gain, multiplied by the setpoint.
    pub kf: f64,
}

impl Pid {
    /// Creates a gain set with no feed-forward term.
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self { Self { kp, ki, kd, kf: 0.0 } }

    /// Returns a copy with the feed-forward gain set to `kf`.
    pub const fn with_feedforward(self, kf: f64) -> Self { Self { kf, ..self } }
}

/// A software PID loop with a fixed period.
#[derive(Debug, Clone)]
pub struct PidController {
    gains:      Pid,
    dt:         f64,
    max_output: f64,
    integral:   f64,
    last_error: Option<f64>,
}

impl PidController {
    /// Creates a controller that is called every `dt` seconds and whose
    /// output is limited to `±max_output`.
    pub fn new(gains: Pid, dt: f64, max_output: f64) -> Self {
        Self {
            gains,
            dt,
            max_output: max_output.abs(),
            integral: 0.0,
            last_error: None,
        }
    }

    /// Clears the integral and derivative history.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_error = None;
    }

    /// Advances the loop by one period and returns the output.
    pub fn calculate(&mut self, setpoint: f64, measurement: f64) -> f64 {
        let Pid { kp, ki, kd, kf } = self.gains;
        let error = setpoint - measurement;

        self.integral += error * self.dt;
        if ki != 0.0 {
            let i_max = self.max_output / ki.abs();
            self.integral = self.integral.clamp(-i_max, i_max);
        }

        // no derivative kick on the first sample
        let derivative = match self.last_error {
            Some(last) if self.dt > 0.0 => (error - last) / self.dt,
            _ => 0.0,
        };
        self.last_error = Some(error);

        let u = kp * error + ki * self.integral + kd * derivative + kf * setpoint;
        u.clamp(-self.max_output, self.max_output)
    }
}
