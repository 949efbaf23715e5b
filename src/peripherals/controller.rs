//! Operator controller snapshots.
//!
//! An [`XboxController`] is refreshed exactly once per control cycle from a
//! [`ControllerSource`]. Every button keeps the previous cycle's value so that
//! commands can react to the cycle a button went down ([`ButtonState::is_pressed`])
//! or came up ([`ButtonState::is_released`]) instead of the whole time it is held.
//!
//! # Example
//!
//! ```ignore
//! use powercell::peripherals::controller::{XboxButton, XboxController};
//!
//! let mut driver = XboxController::new(0);
//! driver.collect_controller_data(&mut source);
//!
//! if driver.button(XboxButton::A).is_pressed() {
//!     // runs once per press, not once per cycle
//! }
//! ```

use log::warn;

use super::HardwareError;

/// A physical button on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XboxButton {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    LeftStick,
    RightStick,
}

/// Raw reading of a controller, as reported by the hardware.
///
/// Sticks are in `[-1, 1]` with the Xbox convention that pushing a stick
/// *up* reads negative. Triggers are in `[0, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RawControllerState {
    pub left_x:        f64,
    pub left_y:        f64,
    pub right_x:       f64,
    pub right_y:       f64,
    pub left_trigger:  f64,
    pub right_trigger: f64,

    pub a:            bool,
    pub b:            bool,
    pub x:            bool,
    pub y:            bool,
    pub left_bumper:  bool,
    pub right_bumper: bool,
    pub back:         bool,
    pub start:        bool,
    pub left_stick:   bool,
    pub right_stick:  bool,
}

impl RawControllerState {
    fn button(&self, button: XboxButton) -> bool {
        match button {
            XboxButton::A => self.a,
            XboxButton::B => self.b,
            XboxButton::X => self.x,
            XboxButton::Y => self.y,
            XboxButton::LeftBumper => self.left_bumper,
            XboxButton::RightBumper => self.right_bumper,
            XboxButton::Back => self.back,
            XboxButton::Start => self.start,
            XboxButton::LeftStick => self.left_stick,
            XboxButton::RightStick => self.right_stick,
        }
    }
}

/// Anything that can be polled for a controller reading.
pub trait ControllerSource {
    /// Reads the controller as it is right now.
    fn poll(&mut self) -> Result<RawControllerState, HardwareError>;
}

/// The state of a button this cycle, relative to the previous cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    last: bool,
    now:  bool,
}

impl ButtonState {
    /// Shifts the current value into history and records `down`.
    pub fn update(&mut self, down: bool) {
        self.last = self.now;
        self.now = down;
    }

    /// The button is down this cycle.
    pub const fn is_held_down(&self) -> bool { self.now }

    /// The button went down this cycle.
    pub const fn is_pressed(&self) -> bool { self.now && !self.last }

    /// The button came up this cycle.
    pub const fn is_released(&self) -> bool { !self.now && self.last }
}

/// A snapshot of an Xbox-layout controller, updated once per cycle.
#[derive(Debug, Default, Clone)]
pub struct XboxController {
    port: u8,

    pub a_button:           ButtonState,
    pub b_button:           ButtonState,
    pub x_button:           ButtonState,
    pub y_button:           ButtonState,
    pub left_bumper:        ButtonState,
    pub right_bumper:       ButtonState,
    pub back_button:        ButtonState,
    pub start_button:       ButtonState,
    pub left_stick_button:  ButtonState,
    pub right_stick_button: ButtonState,

    pub left_x:        f64,
    pub left_y:        f64,
    pub right_x:       f64,
    pub right_y:       f64,
    pub left_trigger:  f64,
    pub right_trigger: f64,
}

impl XboxController {
    /// Creates a controller snapshot for the given driver-station port.
    /// Everything reads neutral until the first collection.
    pub fn new(port: u8) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// The driver-station port this controller is plugged into.
    pub const fn port(&self) -> u8 { self.port }

    /// Polls `source` and advances every button by one cycle.
    ///
    /// A failed poll is logged and treated as a neutral controller, so held
    /// buttons report a release and axes fall back to zero.
    pub fn collect_controller_data(&mut self, source: &mut dyn ControllerSource) {
        let raw = source.poll().unwrap_or_else(|e| {
            warn!("Controller {} State Error: {}", self.port, e);
            RawControllerState::default()
        });
        self.update(&raw);
    }

    /// Advances the snapshot with an already-read state.
    pub fn update(&mut self, raw: &RawControllerState) {
        for button in [
            XboxButton::A,
            XboxButton::B,
            XboxButton::X,
            XboxButton::Y,
            XboxButton::LeftBumper,
            XboxButton::RightBumper,
            XboxButton::Back,
            XboxButton::Start,
            XboxButton::LeftStick,
            XboxButton::RightStick,
        ] {
            self.button_mut(button).update(raw.button(button));
        }

        self.left_x = clamp_axis(raw.left_x, -1.0);
        self.left_y = clamp_axis(raw.left_y, -1.0);
        self.right_x = clamp_axis(raw.right_x, -1.0);
        self.right_y = clamp_axis(raw.right_y, -1.0);
        self.left_trigger = clamp_axis(raw.left_trigger, 0.0);
        self.right_trigger = clamp_axis(raw.right_trigger, 0.0);
    }

    /// Returns the state of `button`.
    pub fn button(&self, button: XboxButton) -> ButtonState {
        match button {
            XboxButton::A => self.a_button,
            XboxButton::B => self.b_button,
            XboxButton::X => self.x_button,
            XboxButton::Y => self.y_button,
            XboxButton::LeftBumper => self.left_bumper,
            XboxButton::RightBumper => self.right_bumper,
            XboxButton::Back => self.back_button,
            XboxButton::Start => self.start_button,
            XboxButton::LeftStick => self.left_stick_button,
            XboxButton::RightStick => self.right_stick_button,
        }
    }

    fn button_mut(&mut self, button: XboxButton) -> &mut ButtonState {
        match button {
            XboxButton::A => &mut self.a_button,
            XboxButton::B => &mut self.b_button,
            XboxButton::X => &mut self.x_button,
            XboxButton::Y => &mut self.y_button,
            XboxButton::LeftBumper => &mut self.left_bumper,
            XboxButton::RightBumper => &mut self.right_bumper,
            XboxButton::Back => &mut self.back_button,
            XboxButton::Start => &mut self.start_button,
            XboxButton::LeftStick => &mut self.left_stick_button,
            XboxButton::RightStick => &mut self.right_stick_button,
        }
    }
}

// NaN reads as centred.
fn clamp_axis(value: f64, min: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(min, 1.0) }
}
