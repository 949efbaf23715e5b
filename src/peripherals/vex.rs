//! V5 implementations of the hardware traits.
//!
//! The V5 controller has no analog triggers or start/back buttons, so
//! [`VexController`] maps its layout onto the Xbox one:
//!
//! | V5            | Xbox                     |
//! |---------------|--------------------------|
//! | A, B, X, Y    | A, B, X, Y               |
//! | L1, R1        | left, right bumper       |
//! | L2, R2        | left, right trigger, 0/1 |
//! | Up, Down      | start, back              |
//! | Left, Right   | left, right stick click  |
//!
//! V5 sticks read positive when pushed up, so the y axes are negated.

use std::{f64::consts::TAU, fmt::Display};

use log::warn;
use vexide::{
    adi::digital::AdiDigitalOut,
    controller::{Controller, ControllerState},
    math::Angle,
    smart::motor::{BrakeMode, Motor},
};

use super::{
    EncoderMotor, HardwareError, MAX_VOLTAGE, Solenoid, SpeedController, VelocityController,
    check_finite,
    controller::{ControllerSource, RawControllerState},
};

/// Position targets are approached at this motor speed.
const POSITION_RPM: i32 = 200;

/// Wraps any vexide error as a [`HardwareError::Device`].
pub fn device_error(e: impl Display) -> HardwareError {
    HardwareError::Device {
        message: e.to_string(),
    }
}

/// A V5 controller read as an Xbox controller.
pub struct VexController {
    controller: Controller,
}

impl VexController {
    pub fn new(controller: Controller) -> Self { Self { controller } }
}

impl ControllerSource for VexController {
    fn poll(&mut self) -> Result<RawControllerState, HardwareError> {
        let state: ControllerState = self.controller.state().map_err(device_error)?;
        let trigger = |down: bool| if down { 1.0 } else { 0.0 };

        Ok(RawControllerState {
            left_x:        state.left_stick.x(),
            left_y:        -state.left_stick.y(),
            right_x:       state.right_stick.x(),
            right_y:       -state.right_stick.y(),
            left_trigger:  trigger(state.button_l2.is_pressed()),
            right_trigger: trigger(state.button_r2.is_pressed()),

            a:            state.button_a.is_pressed(),
            b:            state.button_b.is_pressed(),
            x:            state.button_x.is_pressed(),
            y:            state.button_y.is_pressed(),
            left_bumper:  state.button_l1.is_pressed(),
            right_bumper: state.button_r1.is_pressed(),
            back:         state.button_down.is_pressed(),
            start:        state.button_up.is_pressed(),
            left_stick:   state.button_left.is_pressed(),
            right_stick:  state.button_right.is_pressed(),
        })
    }
}

/// Motors that are mechanically linked and always driven together.
pub struct MotorGroup {
    motors: Vec<Motor>,
}

impl MotorGroup {
    pub fn new(motors: impl IntoIterator<Item = Motor>) -> Self {
        Self {
            motors: motors.into_iter().collect(),
        }
    }

    /// Runs `f` on every motor. Every motor is attempted; the first error is
    /// returned.
    pub fn try_for_each<T, E: Display>(
        &mut self,
        mut f: impl FnMut(&mut Motor) -> Result<T, E>,
    ) -> Result<(), HardwareError> {
        let mut first = None;
        for motor in &mut self.motors {
            if let Err(e) = f(motor) {
                warn!("Motor Error: {}", e);
                first.get_or_insert_with(|| device_error(e));
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// Mean of `f` over the motors that could be read.
    pub fn average<E: Display>(
        &self,
        f: impl Fn(&Motor) -> Result<f64, E>,
    ) -> Result<f64, HardwareError> {
        let mut sum = 0.0;
        let mut count = 0.0;
        let mut last_error = None;
        for motor in &self.motors {
            match f(motor) {
                Ok(value) => {
                    sum += value;
                    count += 1.0;
                }
                Err(e) => last_error = Some(device_error(e)),
            }
        }
        if count > 0.0 {
            Ok(sum / count)
        } else {
            last_error.map_or(Ok(0.0), Err)
        }
    }
}

impl SpeedController for MotorGroup {
    fn set_percent_output(&mut self, percent: f64) -> Result<(), HardwareError> {
        let volts = check_finite(percent)?.clamp(-1.0, 1.0) * MAX_VOLTAGE;
        self.try_for_each(|motor| motor.set_voltage(volts))
    }

    fn set_voltage(&mut self, volts: f64) -> Result<(), HardwareError> {
        let volts = check_finite(volts)?.clamp(-MAX_VOLTAGE, MAX_VOLTAGE);
        self.try_for_each(|motor| motor.set_voltage(volts))
    }

    fn neutral_output(&mut self) -> Result<(), HardwareError> {
        self.try_for_each(|motor| motor.brake(BrakeMode::Coast))
    }
}

impl VelocityController for MotorGroup {
    fn set_velocity_rpm(&mut self, rpm: f64) -> Result<(), HardwareError> {
        let rpm = check_finite(rpm)?.round() as i32;
        self.try_for_each(|motor| motor.set_velocity(rpm))
    }

    fn velocity_rpm(&self) -> Result<f64, HardwareError> { self.average(|motor| motor.velocity()) }
}

impl EncoderMotor for MotorGroup {
    fn position_rotations(&self) -> Result<f64, HardwareError> {
        self.average(|motor| motor.position().map(|angle| angle.as_radians() / TAU))
    }

    fn set_position_rotations(&mut self, rotations: f64) -> Result<(), HardwareError> {
        let angle = Angle::from_radians(check_finite(rotations)? * TAU);
        self.try_for_each(|motor| motor.set_position(angle))
    }

    fn set_position_target(&mut self, rotations: f64) -> Result<(), HardwareError> {
        let angle = Angle::from_radians(check_finite(rotations)? * TAU);
        self.try_for_each(|motor| motor.set_position_target(angle, POSITION_RPM))
    }
}

/// A single-acting pneumatic solenoid on an ADI port.
pub struct AdiSolenoid {
    port:     AdiDigitalOut,
    extended: bool,
}

impl AdiSolenoid {
    pub fn new(port: AdiDigitalOut) -> Self {
        Self {
            port,
            extended: false,
        }
    }
}

impl Solenoid for AdiSolenoid {
    fn set(&mut self, extended: bool) -> Result<(), HardwareError> {
        if extended {
            self.port.set_high().map_err(device_error)?;
        } else {
            self.port.set_low().map_err(device_error)?;
        }
        self.extended = extended;
        Ok(())
    }

    fn get(&self) -> bool { self.extended }
}
