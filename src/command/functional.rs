//! Commands built from closures.

use super::Command;

type Action = Box<dyn FnMut()>;

/// A command whose behaviour is a closure.
///
/// Use [`instant`](Self::instant) for one-shot actions like shifting gears and
/// [`run`](Self::run) for something that should happen every cycle until
/// cancelled.
pub struct FunctionalCommand {
    name:       &'static str,
    on_init:    Option<Action>,
    on_execute: Option<Action>,
    on_end:     Option<Box<dyn FnMut(bool)>>,
    instant:    bool,
}

impl FunctionalCommand {
    /// Runs `action` once when scheduled and finishes on the next cycle.
    pub fn instant(name: &'static str, action: impl FnMut() + 'static) -> Self {
        Self {
            name,
            on_init: Some(Box::new(action)),
            on_execute: None,
            on_end: None,
            instant: true,
        }
    }

    /// Runs `action` every cycle until cancelled.
    pub fn run(name: &'static str, action: impl FnMut() + 'static) -> Self {
        Self {
            name,
            on_init: None,
            on_execute: Some(Box::new(action)),
            on_end: None,
            instant: false,
        }
    }

    /// Adds a closure called when the command ends.
    pub fn with_end(mut self, on_end: impl FnMut(bool) + 'static) -> Self {
        self.on_end = Some(Box::new(on_end));
        self
    }
}

impl Command for FunctionalCommand {
    fn name(&self) -> &str { self.name }

    fn initialize(&mut self) {
        if let Some(init) = self.on_init.as_mut() {
            init();
        }
    }

    fn execute(&mut self) {
        if let Some(execute) = self.on_execute.as_mut() {
            execute();
        }
    }

    fn end(&mut self, interrupted: bool) {
        if let Some(end) = self.on_end.as_mut() {
            end(interrupted);
        }
    }

    fn is_finished(&self) -> bool { self.instant }
}
