//! Execution-environment introspection surface.
//!
//! Sub-operations may ask their continuation out-of-band questions such as
//! "what scheduler am I running under". Combinator adapters answer by
//! forwarding to the final consumer unmodified, so a chain is invisible to
//! this kind of introspection.

use core::fmt;

/// Identifies an execution context an operation may be started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchedulerId(u64);

impl SchedulerId {
    /// Creates a scheduler identifier from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SchedulerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheduler-{}", self.0)
    }
}

/// The execution environment a receiver reports to the operation running
/// beneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RunEnv {
    scheduler: Option<SchedulerId>,
}

impl RunEnv {
    /// An environment with no scheduler association.
    #[must_use]
    pub const fn detached() -> Self {
        Self { scheduler: None }
    }

    /// An environment associated with the given scheduler.
    #[must_use]
    pub const fn on_scheduler(scheduler: SchedulerId) -> Self {
        Self {
            scheduler: Some(scheduler),
        }
    }

    /// Returns the scheduler this environment is associated with, if any.
    #[must_use]
    pub const fn scheduler(&self) -> Option<SchedulerId> {
        self.scheduler
    }
}

impl fmt::Display for RunEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheduler {
            Some(scheduler) => write!(f, "{scheduler}"),
            None => write!(f, "detached"),
        }
    }
}
