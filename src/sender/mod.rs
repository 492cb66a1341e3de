//! Leaf senders.
//!
//! The smallest useful senders: immediate completions on each of the three
//! channels, plus the [`Either`] sum sender for dispatching between two
//! concrete sender types at runtime.
//!
//! - [`just`]: complete inline on the value channel
//! - [`just_done`]: complete inline on the done channel
//! - [`just_error`]: complete inline on the error channel
//! - [`Either`]: one of two concrete senders with identical channel types

pub mod either;
pub mod just;

pub use either::{Either, EitherOperation};
pub use just::{Just, JustDone, JustError, just, just_done, just_error};
