//! Uniform internal-failure representation.
//!
//! Failures arising inside a combinator chain itself (a factory that
//! refuses to produce a successor, a successor that cannot be connected)
//! are distinct from errors reported by the predecessor or successor on
//! their own error channel. They are converted to a [`LinkFault`] and
//! forwarded on the error channel, never retried and never swallowed.

use core::fmt;

/// The step of the chain transition at which an internal failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStage {
    /// Installing the predecessor's values into value storage.
    ///
    /// Installation is a move in this crate and cannot fail, but the stage
    /// is part of the wire-level taxonomy and adapters may surface it.
    Values,
    /// Invoking the successor factory.
    Factory,
    /// Connecting the successor to its continuation.
    Connect,
}

impl LinkStage {
    /// Returns the stage name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::Factory => "factory",
            Self::Connect => "connect",
        }
    }
}

impl fmt::Display for LinkStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An internal failure inside a combinator chain.
///
/// Carries the failing stage and an optional static message (static for
/// determinism). The payload of whatever went wrong is deliberately not
/// carried: a fault is a uniform "the chain could not be assembled"
/// marker, mirroring the conservative error outcome every chain reports as
/// possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkFault {
    stage: LinkStage,
    message: Option<&'static str>,
}

impl LinkFault {
    /// Creates a fault for the given stage.
    #[must_use]
    pub const fn new(stage: LinkStage) -> Self {
        Self {
            stage,
            message: None,
        }
    }

    /// Creates a factory-invocation fault with a message.
    #[must_use]
    pub const fn factory(message: &'static str) -> Self {
        Self {
            stage: LinkStage::Factory,
            message: Some(message),
        }
    }

    /// Creates a successor-connection fault with a message.
    #[must_use]
    pub const fn connect(message: &'static str) -> Self {
        Self {
            stage: LinkStage::Connect,
            message: Some(message),
        }
    }

    /// Creates a value-installation fault with a message.
    #[must_use]
    pub const fn values(message: &'static str) -> Self {
        Self {
            stage: LinkStage::Values,
            message: Some(message),
        }
    }

    /// Returns the stage at which the failure occurred.
    #[must_use]
    pub const fn stage(&self) -> LinkStage {
        self.stage
    }

    /// Returns the message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }
}

impl fmt::Display for LinkFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain link failed during {}", self.stage)?;
        if let Some(message) = self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LinkFault {}
