//! The command framework the teleop wiring schedules onto.
//!
//! A [`Command`] is a unit of robot behaviour with a lifecycle: it is
//! initialised when scheduled, executed once per control cycle, and ended
//! either because it reports itself finished or because it was cancelled.
//! The [`Scheduler`] owns every command and drives that lifecycle; everything
//! else refers to commands by [`CommandId`] and asks for them to be started
//! or stopped through the [`CommandScheduler`] trait.
//!
//! # Example
//!
//! ```
//! use powercell::command::{CommandScheduler, FunctionalCommand, Scheduler};
//!
//! let mut scheduler = Scheduler::new();
//! let hello = scheduler.register(FunctionalCommand::instant("hello", || {
//!     log::info!("hello from the scheduler");
//! }));
//!
//! scheduler.handle().schedule(hello);
//! scheduler.run();
//! assert!(!scheduler.is_scheduled(hello));
//! ```

/// Closure-built commands.
pub mod functional;

/// The single-threaded command scheduler.
pub mod scheduler;

use std::fmt;

pub use self::{
    functional::FunctionalCommand,
    scheduler::{Scheduler, SchedulerHandle},
};

/// Identifies a command registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub(crate) usize);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// A unit of work the scheduler starts, runs periodically and can cancel.
pub trait Command {
    /// Name used in log messages.
    fn name(&self) -> &str { std::any::type_name::<Self>() }

    /// Called once when the command is scheduled.
    fn initialize(&mut self) {}

    /// Called once per control cycle while scheduled.
    fn execute(&mut self) {}

    /// Called once when the command stops. `interrupted` is `true` when it
    /// was cancelled rather than finishing on its own.
    fn end(&mut self, _interrupted: bool) {}

    /// Whether the command has completed. Checked after every execute.
    fn is_finished(&self) -> bool { false }
}

/// Requests commands to be started or stopped.
///
/// Scheduling a command that is already running and cancelling one that
/// isn't are both no-ops.
pub trait CommandScheduler {
    fn schedule(&self, id: CommandId);

    fn cancel(&self, id: CommandId);
}
