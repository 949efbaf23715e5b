//! In-memory hardware and scheduler doubles for unit tests.
//!
//! Every double is a cheap handle over shared state, so a test keeps one
//! clone to inspect while the code under test owns the other.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use crate::{
    command::{Command, CommandId, CommandScheduler},
    drivetrain::DriveTrainVariant,
    motion::pid::Pid,
    peripherals::{
        EncoderMotor, HardwareError, Solenoid, SpeedController, VelocityController, VisionSensor,
        controller::{ControllerSource, RawControllerState},
    },
};

/// One call made on a [`RecordingDriveTrain`].
#[derive(Debug, Clone, PartialEq)]
pub enum DriveCall {
    VelocityPid(f64, f64, f64, f64),
    PositionPid(f64, f64),
    ConfigurePid(Pid),
    ConfigureRampRate(f64),
    SetEncoderPosition(f64, f64),
    Neutral,
    Percent(f64, f64),
    Voltage(f64, f64),
}

#[derive(Default)]
struct Encoder {
    position: f64,
    baseline: f64,
}

impl Encoder {
    fn take_delta(&mut self) -> f64 {
        let delta = self.position - self.baseline;
        self.baseline = self.position;
        delta
    }

    fn reset(&mut self, position: f64) {
        self.position = position;
        self.baseline = position;
    }
}

#[derive(Default)]
struct DriveState {
    calls:           Vec<DriveCall>,
    left:            Encoder,
    right:           Encoder,
    fail:            Option<HardwareError>,
    fail_right_read: Option<HardwareError>,
}

/// A drivetrain that records every call and tracks encoder positions the
/// way real controllers do: each delta read moves that side's baseline.
#[derive(Clone, Default)]
pub struct RecordingDriveTrain {
    state: Rc<RefCell<DriveState>>,
}

impl RecordingDriveTrain {
    pub fn calls(&self) -> Vec<DriveCall> { self.state.borrow().calls.clone() }

    pub fn last_call(&self) -> Option<DriveCall> { self.state.borrow().calls.last().cloned() }

    pub fn clear(&self) { self.state.borrow_mut().calls.clear(); }

    /// Turns the wheels by the given rotations.
    pub fn advance(&self, left: f64, right: f64) {
        let mut state = self.state.borrow_mut();
        state.left.position += left;
        state.right.position += right;
    }

    /// Makes the next right delta read fail, leaving its baseline alone.
    pub fn fail_next_right_read(&self, error: HardwareError) {
        self.state.borrow_mut().fail_right_read = Some(error);
    }

    /// Makes every following output call fail with `error`.
    pub fn fail_with(&self, error: HardwareError) { self.state.borrow_mut().fail = Some(error); }

    fn record(&mut self, call: DriveCall) -> Result<(), HardwareError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.fail.clone() {
            return Err(error);
        }
        state.calls.push(call);
        Ok(())
    }
}

impl DriveTrainVariant for RecordingDriveTrain {
    fn set_velocity_pid(
        &mut self,
        left: f64,
        right: f64,
        left_ff: f64,
        right_ff: f64,
    ) -> Result<(), HardwareError> {
        self.record(DriveCall::VelocityPid(left, right, left_ff, right_ff))
    }

    fn set_position_pid(&mut self, left: f64, right: f64) -> Result<(), HardwareError> {
        self.record(DriveCall::PositionPid(left, right))
    }

    fn configure_pid(&mut self, pid: Pid) -> Result<(), HardwareError> {
        self.record(DriveCall::ConfigurePid(pid))
    }

    fn configure_ramp_rate(&mut self, seconds: f64) -> Result<(), HardwareError> {
        self.record(DriveCall::ConfigureRampRate(seconds))
    }

    fn set_encoder_position(&mut self, left: f64, right: f64) -> Result<(), HardwareError> {
        self.record(DriveCall::SetEncoderPosition(left, right))?;
        let mut state = self.state.borrow_mut();
        state.left.reset(left);
        state.right.reset(right);
        Ok(())
    }

    fn left_delta_rotation(&mut self) -> Result<f64, HardwareError> {
        Ok(self.state.borrow_mut().left.take_delta())
    }

    fn right_delta_rotation(&mut self) -> Result<f64, HardwareError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.fail_right_read.take() {
            return Err(error);
        }
        Ok(state.right.take_delta())
    }

    fn neutral_output(&mut self) -> Result<(), HardwareError> { self.record(DriveCall::Neutral) }

    fn set_percent_output(&mut self, left: f64, right: f64) -> Result<(), HardwareError> {
        self.record(DriveCall::Percent(left, right))
    }

    fn set_voltage(&mut self, left: f64, right: f64) -> Result<(), HardwareError> {
        self.record(DriveCall::Voltage(left, right))
    }
}

/// The last thing a [`MockMotor`] was told to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorOutput {
    Percent(f64),
    Voltage(f64),
    VelocityRpm(f64),
    PositionTarget(f64),
    Neutral,
}

#[derive(Default)]
struct MotorState {
    output:   Option<MotorOutput>,
    position: f64,
    fail:     Option<HardwareError>,
}

/// A motor that remembers its last output and carries an encoder the test
/// can turn.
#[derive(Clone, Default)]
pub struct MockMotor {
    state: Rc<RefCell<MotorState>>,
}

impl MockMotor {
    pub fn output(&self) -> Option<MotorOutput> { self.state.borrow().output }

    /// Encoder reading, in motor rotations.
    pub fn position(&self) -> f64 { self.state.borrow().position }

    /// Turns the shaft by `rotations`.
    pub fn rotate(&self, rotations: f64) { self.state.borrow_mut().position += rotations; }

    /// Makes every following call fail with `error`.
    pub fn fail_with(&self, error: HardwareError) { self.state.borrow_mut().fail = Some(error); }

    fn check(&self) -> Result<(), HardwareError> {
        self.state.borrow().fail.clone().map_or(Ok(()), Err)
    }

    fn apply(&mut self, output: MotorOutput) -> Result<(), HardwareError> {
        self.check()?;
        self.state.borrow_mut().output = Some(output);
        Ok(())
    }
}

impl SpeedController for MockMotor {
    fn set_percent_output(&mut self, percent: f64) -> Result<(), HardwareError> {
        self.apply(MotorOutput::Percent(percent))
    }

    fn set_voltage(&mut self, volts: f64) -> Result<(), HardwareError> {
        self.apply(MotorOutput::Voltage(volts))
    }

    fn neutral_output(&mut self) -> Result<(), HardwareError> { self.apply(MotorOutput::Neutral) }
}

impl VelocityController for MockMotor {
    fn set_velocity_rpm(&mut self, rpm: f64) -> Result<(), HardwareError> {
        self.apply(MotorOutput::VelocityRpm(rpm))
    }

    fn velocity_rpm(&self) -> Result<f64, HardwareError> {
        self.check()?;
        match self.output() {
            Some(MotorOutput::VelocityRpm(rpm)) => Ok(rpm),
            _ => Ok(0.0),
        }
    }
}

impl EncoderMotor for MockMotor {
    fn position_rotations(&self) -> Result<f64, HardwareError> {
        self.check()?;
        Ok(self.position())
    }

    fn set_position_rotations(&mut self, rotations: f64) -> Result<(), HardwareError> {
        self.check()?;
        self.state.borrow_mut().position = rotations;
        Ok(())
    }

    fn set_position_target(&mut self, rotations: f64) -> Result<(), HardwareError> {
        self.apply(MotorOutput::PositionTarget(rotations))
    }
}

#[derive(Default)]
struct SolenoidState {
    extended:  bool,
    fail_next: Option<HardwareError>,
}

/// A solenoid that can be told to fail its next command.
#[derive(Clone, Default)]
pub struct MockSolenoid {
    state: Rc<RefCell<SolenoidState>>,
}

impl MockSolenoid {
    pub fn fail_next(&self, error: HardwareError) {
        self.state.borrow_mut().fail_next = Some(error);
    }
}

impl Solenoid for MockSolenoid {
    fn set(&mut self, extended: bool) -> Result<(), HardwareError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        state.extended = extended;
        Ok(())
    }

    fn get(&self) -> bool { self.state.borrow().extended }
}

/// A vision camera whose target offset is set by the test.
#[derive(Clone, Default)]
pub struct MockVision {
    offset: Rc<Cell<Option<f64>>>,
}

impl MockVision {
    pub fn set_offset(&self, offset: Option<f64>) { self.offset.set(offset); }
}

impl VisionSensor for MockVision {
    fn horizontal_offset(&mut self) -> Option<f64> { self.offset.get() }
}

/// A controller that replays a fixed script, then reads neutral.
pub struct ScriptedController {
    script: VecDeque<Result<RawControllerState, HardwareError>>,
}

impl ScriptedController {
    pub fn new(script: Vec<Result<RawControllerState, HardwareError>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl ControllerSource for ScriptedController {
    fn poll(&mut self) -> Result<RawControllerState, HardwareError> {
        self.script.pop_front().unwrap_or(Ok(RawControllerState::default()))
    }
}

/// A controller the test moves between cycles.
#[derive(Clone, Default)]
pub struct SharedController {
    state: Rc<RefCell<RawControllerState>>,
}

impl SharedController {
    pub fn set(&self, state: RawControllerState) { *self.state.borrow_mut() = state; }

    pub fn update(&self, f: impl FnOnce(&mut RawControllerState)) {
        f(&mut self.state.borrow_mut());
    }
}

impl ControllerSource for SharedController {
    fn poll(&mut self) -> Result<RawControllerState, HardwareError> { Ok(*self.state.borrow()) }
}

/// A schedule or cancel request seen by a [`RecordingScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCall {
    Schedule(CommandId),
    Cancel(CommandId),
}

/// Records requests instead of acting on them.
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    calls: Rc<RefCell<Vec<SchedulerCall>>>,
}

impl RecordingScheduler {
    /// Returns and forgets everything recorded so far.
    pub fn take(&self) -> Vec<SchedulerCall> { std::mem::take(&mut *self.calls.borrow_mut()) }
}

impl CommandScheduler for RecordingScheduler {
    fn schedule(&self, id: CommandId) { self.calls.borrow_mut().push(SchedulerCall::Schedule(id)); }

    fn cancel(&self, id: CommandId) { self.calls.borrow_mut().push(SchedulerCall::Cancel(id)); }
}

/// A lifecycle event seen by a [`TracingCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Initialize(&'static str),
    Execute(&'static str),
    End(&'static str, bool),
}

/// A shared, ordered record of lifecycle events.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<Event> { self.events.borrow().clone() }

    pub fn clear(&self) { self.events.borrow_mut().clear(); }

    fn push(&self, event: Event) { self.events.borrow_mut().push(event); }
}

/// A command that logs its lifecycle.
pub struct TracingCommand {
    name:       &'static str,
    log:        EventLog,
    executions: usize,
    finish_at:  Option<usize>,
    on_execute: Option<Box<dyn FnMut()>>,
}

impl TracingCommand {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            executions: 0,
            finish_at: None,
            on_execute: None,
        }
    }

    /// Reports finished once it has executed `count` times.
    pub fn finishing_after(mut self, count: usize) -> Self {
        self.finish_at = Some(count);
        self
    }

    /// Runs `f` on every execute, after logging it.
    pub fn on_execute(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_execute = Some(Box::new(f));
        self
    }
}

impl Command for TracingCommand {
    fn name(&self) -> &str { self.name }

    fn initialize(&mut self) {
        self.executions = 0;
        self.log.push(Event::Initialize(self.name));
    }

    fn execute(&mut self) {
        self.executions += 1;
        self.log.push(Event::Execute(self.name));
        if let Some(f) = self.on_execute.as_mut() {
            f();
        }
    }

    fn end(&mut self, interrupted: bool) { self.log.push(Event::End(self.name, interrupted)); }

    fn is_finished(&self) -> bool { self.finish_at.is_some_and(|at| self.executions >= at) }
}
