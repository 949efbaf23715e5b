//! Rising-edge detection for continuous conditions.

/// Reports `true` only on the update where the watched condition goes from
/// `false` to `true`.
///
/// Buttons already carry their own edges (see
/// [`ButtonState`](crate::peripherals::controller::ButtonState)); this is for
/// derived conditions such as "the trigger is past 30%".
///
/// # Example
///
/// ```
/// use powercell::motion::latch::LatchedBoolean;
///
/// let mut latch = LatchedBoolean::new();
/// assert!(latch.update(true));
/// assert!(!latch.update(true));
/// assert!(!latch.update(false));
/// assert!(latch.update(true));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LatchedBoolean {
    last: bool,
}

impl LatchedBoolean {
    /// Creates a latch whose condition starts out `false`.
    pub const fn new() -> Self { Self { last: false } }

    /// Feeds this cycle's value of the condition.
    pub fn update(&mut self, value: bool) -> bool {
        let fired = value && !self.last;
        self.last = value;
        fired
    }
}
