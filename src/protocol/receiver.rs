//! The receiver side of the completion protocol.

use crate::types::{Outcome, RunEnv};

/// A continuation that an operation completes into.
///
/// Exactly one of the three channel methods is invoked exactly once per
/// operation; each consumes the receiver, so the contract is enforced by
/// ownership. Receivers that wrap another receiver (combinator
/// continuations) must forward [`env`](Receiver::env) to the wrapped
/// receiver unmodified so that chains stay invisible to introspection.
pub trait Receiver {
    /// The values delivered on the value channel.
    type Values;
    /// The error delivered on the error channel.
    type Error;

    /// Completes the operation with values.
    fn set_value(self, values: Self::Values);

    /// Completes the operation without a value and without an error.
    fn set_done(self);

    /// Completes the operation with an error.
    fn set_error(self, error: Self::Error);

    /// Dispatches a materialized outcome onto the matching channel.
    fn complete(self, outcome: Outcome<Self::Values, Self::Error>)
    where
        Self: Sized,
    {
        match outcome {
            Outcome::Value(values) => self.set_value(values),
            Outcome::Done => self.set_done(),
            Outcome::Error(error) => self.set_error(error),
        }
    }

    /// Answers an out-of-band environment query from the operation running
    /// beneath this receiver.
    fn env(&self) -> RunEnv {
        RunEnv::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    struct ChannelProbe<'a>(&'a AtomicU8);

    impl Receiver for ChannelProbe<'_> {
        type Values = i32;
        type Error = &'static str;

        fn set_value(self, _values: i32) {
            self.0.store(1, Ordering::SeqCst);
        }

        fn set_done(self) {
            self.0.store(2, Ordering::SeqCst);
        }

        fn set_error(self, _error: &'static str) {
            self.0.store(3, Ordering::SeqCst);
        }
    }

    #[test]
    fn complete_dispatches_onto_the_matching_channel() {
        let hit = AtomicU8::new(0);
        ChannelProbe(&hit).complete(Outcome::Value(7));
        assert_eq!(hit.load(Ordering::SeqCst), 1);
        ChannelProbe(&hit).complete(Outcome::Done);
        assert_eq!(hit.load(Ordering::SeqCst), 2);
        ChannelProbe(&hit).complete(Outcome::Error("boom"));
        assert_eq!(hit.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn env_defaults_to_detached() {
        let hit = AtomicU8::new(0);
        assert_eq!(ChannelProbe(&hit).env(), RunEnv::detached());
    }
}
