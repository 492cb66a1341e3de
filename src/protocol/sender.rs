//! The sender side of the completion protocol.

use core::fmt;

use crate::types::{BlockingKind, LinkFault};

use super::Receiver;

/// A connected computation, ready to run.
///
/// `start` consumes the operation: a synchronous operation delivers its
/// completion into its receiver before returning, an asynchronous one
/// moves itself into whatever will complete it later. Callers must not
/// assume either.
pub trait Operation {
    /// Starts the operation.
    fn start(self);
}

/// An inert description of an asynchronous computation.
///
/// A sender does nothing until it is connected to a receiver, which yields
/// an [`Operation`]. Connecting consumes the sender; descriptors meant to
/// be reused implement `Clone`. Static metadata (possible completion
/// channels, blocking classification, scheduler affinity) is exposed on
/// the trait so framework-level analysis needs no live operation.
pub trait Sender {
    /// The values this sender may deliver on the value channel.
    type Values;
    /// The error this sender may deliver on the error channel.
    type Error;

    /// The operation produced by connecting to a receiver of type `R`.
    type Operation<R>: Operation
    where
        R: Receiver<Values = Self::Values, Error = Self::Error>;

    /// Worst-case static blocking classification.
    const BLOCKING: BlockingKind = BlockingKind::Maybe;

    /// Whether this sender may complete on the done channel.
    const SENDS_DONE: bool = true;

    /// Whether this sender always completes on the execution context it
    /// was started on.
    const SCHEDULER_AFFINE: bool = false;

    /// Connects this sender to a receiver.
    ///
    /// On failure the receiver is handed back inside the error so the
    /// caller can still deliver a completion to it.
    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = Self::Values, Error = Self::Error>;

    /// Instance-specific blocking classification.
    ///
    /// Defaults to the static classification; senders whose blocking
    /// behavior depends on runtime state refine it here.
    fn blocking(&self) -> BlockingKind {
        Self::BLOCKING
    }
}

/// Error returned when a sender cannot be connected to a receiver.
///
/// The receiver travels back with the fault so the caller can still
/// deliver a completion to it, in the style of
/// [`std::sync::mpsc::SendError`] returning the undelivered payload.
pub struct ConnectError<R> {
    receiver: R,
    fault: LinkFault,
}

impl<R> ConnectError<R> {
    /// Creates a connect error carrying the undelivered receiver.
    pub fn new(receiver: R, fault: LinkFault) -> Self {
        Self { receiver, fault }
    }

    /// Returns the fault that prevented the connection.
    #[must_use]
    pub const fn fault(&self) -> LinkFault {
        self.fault
    }

    /// Splits the error into the undelivered receiver and the fault.
    pub fn into_parts(self) -> (R, LinkFault) {
        (self.receiver, self.fault)
    }
}

impl<R> fmt::Debug for ConnectError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectError")
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Display for ConnectError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fault)
    }
}

impl<R> std::error::Error for ConnectError<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinkStage;

    #[test]
    fn connect_error_round_trips_the_receiver() {
        let err = ConnectError::new("the receiver", LinkFault::connect("no route"));
        assert_eq!(err.fault().stage(), LinkStage::Connect);
        let (receiver, fault) = err.into_parts();
        assert_eq!(receiver, "the receiver");
        assert_eq!(fault, LinkFault::connect("no route"));
    }

    #[test]
    fn connect_error_debug_hides_the_receiver() {
        struct Opaque;
        let err = ConnectError::new(Opaque, LinkFault::connect("no route"));
        let rendered = format!("{err:?}");
        assert!(rendered.contains("ConnectError"));
        assert!(rendered.contains("Connect"));
    }
}
