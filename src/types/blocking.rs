//! Blocking classification lattice.
//!
//! A sender's blocking classification says whether its operation completes
//! synchronously inside `start` or asynchronously later. The ordering is
//! the framework ordering: `Maybe` carries the least information and sits
//! at the bottom; `AlwaysInline` is the strongest synchronous guarantee.

use core::fmt;

/// Classification of when an operation delivers its completion relative to
/// `start` returning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockingKind {
    /// Unknown: the completion may arrive before or after `start` returns.
    #[default]
    Maybe = 0,
    /// The completion never arrives before `start` returns.
    Never = 1,
    /// The completion always arrives before `start` returns, possibly on a
    /// different execution context.
    Always = 2,
    /// The completion always arrives before `start` returns, on the
    /// calling execution context.
    AlwaysInline = 3,
}

impl BlockingKind {
    /// Returns the classification carrying the stronger guarantee of the
    /// two, under the framework ordering.
    #[must_use]
    pub const fn stronger(self, other: Self) -> Self {
        if self as u8 >= other as u8 { self } else { other }
    }

    /// Returns the classification carrying the weaker guarantee of the
    /// two, under the framework ordering.
    #[must_use]
    pub const fn weaker(self, other: Self) -> Self {
        if self as u8 <= other as u8 { self } else { other }
    }

    /// Returns the classification of running one operation to completion
    /// and then another whose identity is not known until the first
    /// completes.
    ///
    /// The second operand is a static worst case over every possible
    /// second operation, so it is clamped to [`BlockingKind::Maybe`]
    /// before combining.
    #[must_use]
    pub const fn sequenced_with(self, successor: Self) -> Self {
        self.stronger(successor.weaker(Self::Maybe))
    }

    /// Returns the classification of an operation that runs one of two
    /// alternatives, chosen at runtime.
    ///
    /// A guarantee only holds if both alternatives make it, so the result
    /// is the common classification when the arms agree and
    /// [`BlockingKind::Maybe`] otherwise.
    #[must_use]
    pub const fn alternative_with(self, other: Self) -> Self {
        if self as u8 == other as u8 {
            self
        } else {
            Self::Maybe
        }
    }

    /// Returns the classification name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maybe => "maybe",
            Self::Never => "never",
            Self::Always => "always",
            Self::AlwaysInline => "always-inline",
        }
    }

    /// Returns true if an operation with this classification is guaranteed
    /// to have completed by the time `start` returns.
    #[must_use]
    pub const fn is_always_complete_inline(self) -> bool {
        matches!(self, Self::Always | Self::AlwaysInline)
    }
}

impl fmt::Display for BlockingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
