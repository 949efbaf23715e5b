//! Single-threaded command scheduler.
//!
//! [`Scheduler::run`] is called once per control cycle. It executes every
//! scheduled command in the order they were scheduled and ends the ones that
//! report themselves finished.
//!
//! Commands never hold the scheduler itself. They hold a [`SchedulerHandle`],
//! which queues schedule and cancel requests. The scheduler applies queued
//! requests right after the command that made them has executed. A cancelled
//! command is skipped for the rest of the cycle; a newly scheduled one is
//! initialised at once and first executes on the next cycle.

use std::{cell::RefCell, rc::Rc};

use heapless::Deque;
use log::{debug, warn};

use super::{Command, CommandId, CommandScheduler};

/// Requests a single cycle may queue before new ones are dropped.
const MAX_PENDING: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Schedule(CommandId),
    Cancel(CommandId),
}

/// A cloneable way to schedule and cancel commands from inside other
/// commands.
#[derive(Clone, Default)]
pub struct SchedulerHandle {
    pending: Rc<RefCell<Deque<Request, MAX_PENDING>>>,
}

impl SchedulerHandle {
    fn push(&self, request: Request) {
        if self.pending.borrow_mut().push_back(request).is_err() {
            warn!("Scheduler request queue full, dropping {:?}", request);
        }
    }

    fn pop(&self) -> Option<Request> { self.pending.borrow_mut().pop_front() }

    fn clear(&self) { self.pending.borrow_mut().clear(); }
}

impl CommandScheduler for SchedulerHandle {
    fn schedule(&self, id: CommandId) { self.push(Request::Schedule(id)); }

    fn cancel(&self, id: CommandId) { self.push(Request::Cancel(id)); }
}

/// Owns the robot's commands and runs the scheduled ones.
#[derive(Default)]
pub struct Scheduler {
    commands:  Vec<Box<dyn Command>>,
    scheduled: Vec<CommandId>,
    handle:    SchedulerHandle,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self { Self::default() }

    /// Takes ownership of `command` and returns the id to refer to it by.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> CommandId {
        self.register_boxed(Box::new(command))
    }

    /// Like [`register`](Self::register), for commands that are already boxed.
    pub fn register_boxed(&mut self, command: Box<dyn Command>) -> CommandId {
        let id = CommandId(self.commands.len());
        debug!("Registered command {} {}", id, command.name());
        self.commands.push(command);
        id
    }

    /// A handle that queues requests onto this scheduler.
    pub fn handle(&self) -> SchedulerHandle { self.handle.clone() }

    /// Whether `id` is currently running.
    pub fn is_scheduled(&self, id: CommandId) -> bool { self.scheduled.contains(&id) }

    /// Running commands, in the order they execute.
    pub fn scheduled(&self) -> &[CommandId] { &self.scheduled }

    /// The name of a registered command.
    pub fn name(&self, id: CommandId) -> Option<&str> {
        self.commands.get(id.0).map(|command| command.name())
    }

    /// Starts `id` immediately, then applies anything its `initialize` queued.
    pub fn schedule(&mut self, id: CommandId) {
        self.start(id);
        self.process_requests();
    }

    /// Interrupts `id` immediately.
    pub fn cancel(&mut self, id: CommandId) {
        self.stop(id, true);
        self.process_requests();
    }

    /// Interrupts every running command and drops pending requests.
    pub fn cancel_all(&mut self) {
        for id in self.scheduled.clone().into_iter().rev() {
            self.stop(id, true);
        }
        self.handle.clear();
    }

    /// Runs one control cycle.
    pub fn run(&mut self) {
        self.process_requests();

        let running = self.scheduled.clone();
        for id in running {
            // cancelled earlier this cycle
            if !self.is_scheduled(id) {
                continue;
            }

            let command = &mut self.commands[id.0];
            command.execute();
            if command.is_finished() {
                command.end(false);
                debug!("Finished command {} {}", id, command.name());
                self.scheduled.retain(|running| *running != id);
            }

            self.process_requests();
        }
    }

    fn start(&mut self, id: CommandId) {
        let Some(command) = self.commands.get_mut(id.0) else {
            warn!("Cannot schedule unknown command {}", id);
            return;
        };
        if self.scheduled.contains(&id) {
            return;
        }

        debug!("Scheduling command {} {}", id, command.name());
        self.scheduled.push(id);
        command.initialize();
    }

    fn stop(&mut self, id: CommandId, interrupted: bool) {
        let Some(position) = self.scheduled.iter().position(|running| *running == id) else {
            return;
        };
        self.scheduled.remove(position);

        let command = &mut self.commands[id.0];
        debug!("Cancelling command {} {}", id, command.name());
        command.end(interrupted);
    }

    fn process_requests(&mut self) {
        while let Some(request) = self.handle.pop() {
            match request {
                Request::Schedule(id) => self.start(id),
                Request::Cancel(id) => self.stop(id, true),
            }
        }
    }
}
