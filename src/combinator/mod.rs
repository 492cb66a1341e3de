//! Combinators for sender/receiver chains.
//!
//! This module provides the core combinator:
//!
//! - [`let_value`](mod@let_value): run a predecessor, feed its values to a
//!   factory, run the successor the factory returns
//!
//! plus [`SenderExt`], the chaining surface that makes combinators read
//! left to right.

pub mod let_value;

pub use let_value::{LetValue, LetValueError, SuccessorFactory, let_value};

use crate::protocol::Sender;

/// Chaining adapters for senders.
///
/// Blanket-implemented for every sender; the methods are the pipeline
/// form of the free-function constructors.
pub trait SenderExt: Sender + Sized {
    /// Chains a successor factory after this sender.
    ///
    /// Equivalent to [`let_value(self, factory)`](let_value()).
    #[track_caller]
    fn let_value<F>(self, factory: F) -> LetValue<Self, F>
    where
        F: SuccessorFactory<Self::Values>,
    {
        let_value(self, factory)
    }
}

impl<S: Sender> SenderExt for S {}
