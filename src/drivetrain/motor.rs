//! A [`DriveTrainVariant`] over two sides of encoder motors.
//!
//! Smart motors close their velocity and position loops in firmware with
//! fixed gains and have no open-loop ramp. [`MotorDriveTrain`] therefore ramps
//! percent and voltage output itself with a [`SlewLimiter`] per side, and
//! treats [`configure_pid`](DriveTrainVariant::configure_pid) as advisory.
//!
//! Both sides are always commanded, even when the first one fails, so a
//! single bad motor never leaves the sides with different targets. The left
//! error is returned when both fail.

use log::debug;

use super::DriveTrainVariant;
use crate::{
    config::LOOP_PERIOD,
    motion::{pid::Pid, ramp::SlewLimiter},
    peripherals::{EncoderMotor, HardwareError, MAX_VOLTAGE, check_finite},
};

struct Side<M> {
    motors:        M,
    ramp:          SlewLimiter,
    // motor rotations at the previous delta read
    last_rotation: f64,
}

impl<M: EncoderMotor> Side<M> {
    fn new(motors: M) -> Self {
        Self {
            motors,
            ramp: SlewLimiter::new(MAX_VOLTAGE, LOOP_PERIOD.as_secs_f64()),
            last_rotation: 0.0,
        }
    }

    fn delta(&mut self) -> Result<f64, HardwareError> {
        let rotation = self.motors.position_rotations()?;
        let delta = rotation - self.last_rotation;
        self.last_rotation = rotation;
        Ok(delta)
    }

    fn set_position(&mut self, rotations: f64) -> Result<(), HardwareError> {
        self.motors.set_position_rotations(rotations)?;
        self.last_rotation = rotations;
        Ok(())
    }

    fn set_voltage(&mut self, volts: f64) -> Result<(), HardwareError> {
        let volts = self
            .ramp
            .calculate(check_finite(volts)?.clamp(-MAX_VOLTAGE, MAX_VOLTAGE));
        self.motors.set_voltage(volts)
    }

    fn neutral(&mut self) -> Result<(), HardwareError> {
        self.ramp.reset(0.0);
        self.motors.neutral_output()
    }
}

/// Two motor sides geared to the wheels.
pub struct MotorDriveTrain<M> {
    left:       Side<M>,
    right:      Side<M>,
    /// Wheel rotations per motor rotation.
    gear_ratio: f64,
}

impl<M: EncoderMotor> MotorDriveTrain<M> {
    pub fn new(left: M, right: M, gear_ratio: f64) -> Self {
        Self {
            left: Side::new(left),
            right: Side::new(right),
            gear_ratio,
        }
    }

    fn to_motor(&self, wheel_rotations: f64) -> f64 { wheel_rotations / self.gear_ratio }
}

impl<M: EncoderMotor> DriveTrainVariant for MotorDriveTrain<M> {
    fn set_velocity_pid(
        &mut self,
        left_velocity_rotations_per_second: f64,
        right_velocity_rotations_per_second: f64,
        _left_voltage: f64,
        _right_voltage: f64,
    ) -> Result<(), HardwareError> {
        // firmware velocity loop; feed-forward has nowhere to go
        let left_rpm = self.to_motor(check_finite(left_velocity_rotations_per_second)?) * 60.0;
        let right_rpm = self.to_motor(check_finite(right_velocity_rotations_per_second)?) * 60.0;
        self.left.ramp.reset(0.0);
        self.right.ramp.reset(0.0);
        let left = self.left.motors.set_velocity_rpm(left_rpm);
        let right = self.right.motors.set_velocity_rpm(right_rpm);
        left.and(right)
    }

    fn set_position_pid(
        &mut self,
        left_distance_rotations: f64,
        right_distance_rotations: f64,
    ) -> Result<(), HardwareError> {
        let left_target = self.to_motor(check_finite(left_distance_rotations)?);
        let right_target = self.to_motor(check_finite(right_distance_rotations)?);
        let left = self.left.motors.set_position_target(left_target);
        let right = self.right.motors.set_position_target(right_target);
        left.and(right)
    }

    fn configure_pid(&mut self, pid: Pid) -> Result<(), HardwareError> {
        debug!("Drive motors use firmware gains, ignoring {:?}", pid);
        Ok(())
    }

    fn configure_ramp_rate(
        &mut self,
        seconds_from_neutral_to_full: f64,
    ) -> Result<(), HardwareError> {
        let seconds = check_finite(seconds_from_neutral_to_full)?;
        self.left.ramp.set_ramp(seconds);
        self.right.ramp.set_ramp(seconds);
        Ok(())
    }

    fn set_encoder_position(
        &mut self,
        left_rotations: f64,
        right_rotations: f64,
    ) -> Result<(), HardwareError> {
        let left_position = self.to_motor(check_finite(left_rotations)?);
        let right_position = self.to_motor(check_finite(right_rotations)?);
        let left = self.left.set_position(left_position);
        let right = self.right.set_position(right_position);
        left.and(right)
    }

    fn left_delta_rotation(&mut self) -> Result<f64, HardwareError> {
        Ok(self.left.delta()? * self.gear_ratio)
    }

    fn right_delta_rotation(&mut self) -> Result<f64, HardwareError> {
        Ok(self.right.delta()? * self.gear_ratio)
    }

    fn neutral_output(&mut self) -> Result<(), HardwareError> {
        let left = self.left.neutral();
        let right = self.right.neutral();
        left.and(right)
    }

    fn set_percent_output(
        &mut self,
        left_percent: f64,
        right_percent: f64,
    ) -> Result<(), HardwareError> {
        let left = check_finite(left_percent)?.clamp(-1.0, 1.0) * MAX_VOLTAGE;
        let right = check_finite(right_percent)?.clamp(-1.0, 1.0) * MAX_VOLTAGE;
        self.set_voltage(left, right)
    }

    fn set_voltage(&mut self, left_voltage: f64, right_voltage: f64) -> Result<(), HardwareError> {
        let left = self.left.set_voltage(left_voltage);
        let right = self.right.set_voltage(right_voltage);
        left.and(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockMotor, MotorOutput};

    const TOL: f64 = 1e-9;

    fn drivetrain(gear_ratio: f64) -> (MotorDriveTrain<MockMotor>, MockMotor, MockMotor) {
        let left = MockMotor::default();
        let right = MockMotor::default();
        let dt = MotorDriveTrain::new(left.clone(), right.clone(), gear_ratio);
        (dt, left, right)
    }

    fn volts(motor: &MockMotor) -> f64 {
        match motor.output() {
            Some(MotorOutput::Voltage(volts)) => volts,
            other => panic!("expected a voltage, got {other:?}"),
        }
    }

    #[test]
    fn delta_is_motion_since_last_read() {
        let (mut dt, left, right) = drivetrain(0.5);
        left.rotate(2.0);
        right.rotate(-1.0);

        assert!((dt.left_delta_rotation().unwrap() - 1.0).abs() < TOL);
        assert!((dt.right_delta_rotation().unwrap() + 0.5).abs() < TOL);
        assert_eq!(dt.left_delta_rotation().unwrap(), 0.0);

        left.rotate(1.0);
        assert!((dt.left_delta_rotation().unwrap() - 0.5).abs() < TOL);
    }

    #[test]
    fn encoder_position_moves_the_baseline() {
        let (mut dt, left, right) = drivetrain(0.5);
        left.rotate(3.0);
        dt.set_encoder_position(1.0, 0.0).unwrap();

        assert_eq!(left.position(), 2.0);
        assert_eq!(right.position(), 0.0);
        assert_eq!(dt.left_delta_rotation().unwrap(), 0.0);

        left.rotate(1.0);
        assert!((dt.left_delta_rotation().unwrap() - 0.5).abs() < TOL);
    }

    #[test]
    fn voltage_is_ramped_per_side() {
        let (mut dt, left, right) = drivetrain(1.0);
        // 12V over 0.2s at 20ms per cycle is 1.2V per cycle
        dt.configure_ramp_rate(0.2).unwrap();

        dt.set_voltage(12.0, -12.0).unwrap();
        assert!((volts(&left) - 1.2).abs() < TOL);
        assert!((volts(&right) + 1.2).abs() < TOL);

        dt.set_voltage(12.0, -12.0).unwrap();
        assert!((volts(&left) - 2.4).abs() < TOL);

        dt.neutral_output().unwrap();
        assert_eq!(left.output(), Some(MotorOutput::Neutral));
        dt.set_voltage(12.0, 0.0).unwrap();
        assert!((volts(&left) - 1.2).abs() < TOL);
    }

    #[test]
    fn percent_output_is_scaled_to_volts() {
        let (mut dt, left, right) = drivetrain(1.0);
        dt.set_percent_output(2.0, -0.5).unwrap();
        assert_eq!(left.output(), Some(MotorOutput::Voltage(12.0)));
        assert_eq!(right.output(), Some(MotorOutput::Voltage(-6.0)));
        assert!(dt.set_percent_output(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn velocity_is_geared_to_motor_rpm() {
        let (mut dt, left, right) = drivetrain(0.5);
        dt.set_velocity_pid(2.0, -1.0, 0.4, -0.4).unwrap();
        assert_eq!(left.output(), Some(MotorOutput::VelocityRpm(240.0)));
        assert_eq!(right.output(), Some(MotorOutput::VelocityRpm(-120.0)));
    }

    #[test]
    fn failing_side_does_not_strand_the_other() {
        let (mut dt, left, right) = drivetrain(0.5);
        left.fail_with(HardwareError::Disconnected { port: 1 });

        assert_eq!(
            dt.set_position_pid(1.0, 1.0),
            Err(HardwareError::Disconnected { port: 1 })
        );
        assert_eq!(right.output(), Some(MotorOutput::PositionTarget(2.0)));

        right.rotate(4.0);
        assert!(dt.set_encoder_position(1.0, 1.0).is_err());
        assert_eq!(right.position(), 2.0);
        assert_eq!(dt.right_delta_rotation().unwrap(), 0.0);

        assert!(dt.neutral_output().is_err());
        assert_eq!(right.output(), Some(MotorOutput::Neutral));

        assert!(dt.set_voltage(6.0, 6.0).is_err());
        assert_eq!(right.output(), Some(MotorOutput::Voltage(6.0)));
    }
}
