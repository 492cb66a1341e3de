//! Three-channel completion result.
//!
//! Every operation completes exactly once on exactly one of three channels:
//! value, done, or error. [`Outcome`] is the materialized form of that
//! completion, used by leaf senders, adapters, and test consumers.

use core::fmt;

/// The observed result of a completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    /// The operation completed on the value channel.
    Value(V),
    /// The operation completed on the done channel (stopped without a
    /// value and without an error).
    Done,
    /// The operation completed on the error channel.
    Error(E),
}

impl<V, E> Outcome<V, E> {
    /// Returns true if this outcome is on the value channel.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true if this outcome is on the done channel.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if this outcome is on the error channel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the value, if this outcome is on the value channel.
    pub fn value(self) -> Option<V> {
        match self {
            Self::Value(v) => Some(v),
            Self::Done | Self::Error(_) => None,
        }
    }

    /// Returns the error, if this outcome is on the error channel.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Error(e) => Some(e),
            Self::Value(_) | Self::Done => None,
        }
    }

    /// Maps the value channel, leaving the other channels untouched.
    pub fn map_value<V2>(self, f: impl FnOnce(V) -> V2) -> Outcome<V2, E> {
        match self {
            Self::Value(v) => Outcome::Value(f(v)),
            Self::Done => Outcome::Done,
            Self::Error(e) => Outcome::Error(e),
        }
    }

    /// Maps the error channel, leaving the other channels untouched.
    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<V, E2> {
        match self {
            Self::Value(v) => Outcome::Value(v),
            Self::Done => Outcome::Done,
            Self::Error(e) => Outcome::Error(f(e)),
        }
    }

    /// Returns the name of the channel this outcome completed on.
    #[must_use]
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Done => "done",
            Self::Error(_) => "error",
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "value({v})"),
            Self::Done => write!(f, "done"),
            Self::Error(e) => write!(f, "error({e})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names() {
        let value: Outcome<i32, &str> = Outcome::Value(1);
        let done: Outcome<i32, &str> = Outcome::Done;
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(value.channel(), "value");
        assert_eq!(done.channel(), "done");
        assert_eq!(error.channel(), "error");
    }

    #[test]
    fn map_value_leaves_other_channels() {
        let done: Outcome<i32, &str> = Outcome::Done;
        assert_eq!(done.map_value(|n| n + 1), Outcome::Done);
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(error.map_value(|n| n + 1), Outcome::Error("boom"));
        let value: Outcome<i32, &str> = Outcome::Value(41);
        assert_eq!(value.map_value(|n| n + 1), Outcome::Value(42));
    }

    #[test]
    fn map_error_leaves_other_channels() {
        let value: Outcome<i32, &str> = Outcome::Value(41);
        assert_eq!(value.map_error(str::len), Outcome::Value(41));
        let done: Outcome<i32, &str> = Outcome::Done;
        assert_eq!(done.map_error(str::len), Outcome::Done);
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(error.map_error(str::len), Outcome::Error(4));
    }

    #[test]
    fn accessors() {
        let value: Outcome<i32, &str> = Outcome::Value(7);
        assert!(value.is_value());
        assert_eq!(value.value(), Some(7));
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(error.error(), Some("boom"));
        assert_eq!(error.value(), None);
    }
}
