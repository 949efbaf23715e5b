//! Joystick input shaping.

/// Zeroes small stick and trigger readings.
///
/// Inside `|value| <= deadband` the result is `0.0`. Outside, the remaining
/// travel is rescaled so the output starts at zero at the edge of the band
/// and still reaches `±1.0` at full deflection.
///
/// # Example
///
/// ```
/// use powercell::motion::util::apply_deadband;
///
/// assert_eq!(apply_deadband(0.1, 0.2), 0.0);
/// assert_eq!(apply_deadband(1.0, 0.2), 1.0);
/// assert!((apply_deadband(-0.6, 0.2) + 0.5).abs() < 1e-12);
/// ```
pub fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if value.abs() <= deadband {
        return 0.0;
    }
    if deadband >= 1.0 {
        return 0.0;
    }
    (value - deadband.copysign(value)) / (1.0 - deadband)
}
