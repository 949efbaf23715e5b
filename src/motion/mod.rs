//! Control-loop building blocks.
//!
//! Small, allocation-free helpers shared by the commands and drivetrain
//! implementations:
//!
//! - **Latching**: Rising-edge detection for derived conditions.
//! - **Input shaping**: Deadbands for sticks and triggers.
//! - **PID**: Gain sets and a discrete PID controller.
//! - **Ramping**: Slew limiting for hardware without a native ramp.

/// Edge-triggered latch.
///
/// Provides [`LatchedBoolean`](latch::LatchedBoolean), which reports a
/// condition only on the cycle it becomes true.
pub mod latch;

/// PID gains and controller.
pub mod pid;

/// Output ramp limiting.
pub mod ramp;

/// Joystick input shaping.
pub mod util;
