//! The let-value combinator.
//!
//! [`let_value`] chains two asynchronous computations where the second is
//! *chosen from the values of the first*: run the predecessor, feed the
//! values it produces into a factory, run the successor the factory
//! returns, forward the successor's completion to the final consumer.
//!
//! # Phases and ownership
//!
//! A chain moves through three phases, tracked by [`Phase`]:
//!
//! 1. `PredActive` — the predecessor operation is live. Its continuation
//!    ([`PredecessorReceiver`]) owns the factory and the final consumer.
//! 2. `ValuesOnly` — the predecessor has delivered values; they are
//!    installed in [`ValueStorage`] while the factory runs. No
//!    sub-operation is live. Observable only inside the transition.
//! 3. `SuccActive` — the successor operation is live. Its continuation
//!    ([`SuccessorReceiver`]) owns the final consumer *and* the value
//!    storage, so the values stay live for the entire successor phase.
//!
//! Each continuation owns exactly the members that are live in its phase,
//! and every handoff is a move, so the two sub-operations can never
//! coexist and nothing can be released twice. Failures during the
//! transition (factory invocation, successor connection) drop whatever is
//! currently owned and forward a uniform [`LinkFault`] on the error
//! channel.
//!
//! # Errors
//!
//! The composite error type is [`LetValueError`]: predecessor and
//! successor errors pass through with their payload untouched, and the
//! `Link` variant is always part of the contract — even for chains whose
//! factory and successor cannot in fact fail — so the possible-outcome
//! set is never narrowed by cleverness.

use core::marker::PhantomData;

use thiserror::Error;

use crate::protocol::{ConnectError, Operation, Receiver, Sender};
use crate::tracing_compat::trace;
use crate::types::{BlockingKind, CallSite, LinkFault, RunEnv};

/// Which members of an in-flight chain are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The predecessor operation is live; no values are stored.
    PredActive,
    /// Values are stored; neither sub-operation is live.
    ValuesOnly,
    /// The successor operation is live; values remain stored.
    SuccActive,
}

/// In-place storage for the values the predecessor produced.
///
/// At most one set of values is live at a time. Values become live when
/// the predecessor completes on the value channel and stay live until the
/// successor has delivered its own completion; every failure path in
/// between releases them exactly once.
#[derive(Debug)]
pub struct ValueStorage<V> {
    values: V,
}

impl<V> ValueStorage<V> {
    fn install(values: V) -> Self {
        Self { values }
    }

    fn values_mut(&mut self) -> &mut V {
        &mut self.values
    }
}

/// Maps the values a predecessor produced into a successor sender.
///
/// Consumed by value, so a factory is invoked at most once per chain. The
/// factory receives `&mut` access to the stored values; the values
/// themselves remain owned by the chain for the entire successor phase.
pub trait SuccessorFactory<V> {
    /// The sender this factory produces.
    type Successor: Sender;

    /// Produces the successor, or a fault if the successor cannot be
    /// built.
    fn build(self, values: &mut V) -> Result<Self::Successor, LinkFault>;
}

/// Conversion from a factory's return value into `Result<sender, fault>`.
///
/// Lets `FnOnce` factories return either a bare sender (infallible
/// factory) or a `Result` (fallible factory).
pub trait IntoSenderOutcome {
    /// The sender type produced on success.
    type Sender: Sender;

    /// Converts into the canonical fallible form.
    fn into_sender_outcome(self) -> Result<Self::Sender, LinkFault>;
}

impl<S: Sender> IntoSenderOutcome for S {
    type Sender = S;

    fn into_sender_outcome(self) -> Result<S, LinkFault> {
        Ok(self)
    }
}

impl<S: Sender> IntoSenderOutcome for Result<S, LinkFault> {
    type Sender = S;

    fn into_sender_outcome(self) -> Result<S, LinkFault> {
        self
    }
}

impl<V, F, O> SuccessorFactory<V> for F
where
    F: FnOnce(&mut V) -> O,
    O: IntoSenderOutcome,
{
    type Successor = O::Sender;

    fn build(self, values: &mut V) -> Result<Self::Successor, LinkFault> {
        self(values).into_sender_outcome()
    }
}

type SuccessorOf<F, V> = <F as SuccessorFactory<V>>::Successor;
type SuccessorValues<F, V> = <SuccessorOf<F, V> as Sender>::Values;
type SuccessorError<F, V> = <SuccessorOf<F, V> as Sender>::Error;
type ChainError<P, F> =
    LetValueError<<P as Sender>::Error, SuccessorError<F, <P as Sender>::Values>>;

/// Error reported by a let-value chain.
///
/// Predecessor and successor errors carry their payload untouched; `Link`
/// is the uniform representation of a failure inside the chain itself and
/// is part of every chain's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetValueError<P, S> {
    /// The predecessor completed on its error channel.
    #[error("predecessor failed: {0}")]
    Predecessor(P),
    /// The successor completed on its error channel.
    #[error("successor failed: {0}")]
    Successor(S),
    /// The chain itself failed while building or connecting the successor.
    #[error(transparent)]
    Link(#[from] LinkFault),
}

/// Descriptor for a let-value chain.
///
/// An immutable value capturing the predecessor, the factory, and the
/// call site at which the chain was assembled. Connecting consumes the
/// descriptor; clone it to build independent chains from the same
/// description.
#[derive(Debug, Clone, Copy)]
#[must_use = "senders do nothing unless connected and started"]
pub struct LetValue<P, F> {
    pred: P,
    factory: F,
    call_site: CallSite,
}

impl<P, F> LetValue<P, F> {
    /// Returns the call site at which this descriptor was assembled.
    ///
    /// Diagnostic attribution only; passed through unchanged to tooling.
    #[must_use]
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }
}

/// Chains a successor factory after a predecessor sender.
///
/// See the [module docs](self) for the phase and failure semantics.
#[track_caller]
pub fn let_value<P, F>(pred: P, factory: F) -> LetValue<P, F>
where
    P: Sender,
    F: SuccessorFactory<P::Values>,
{
    LetValue {
        pred,
        factory,
        call_site: CallSite::here(),
    }
}

impl<P, F> Sender for LetValue<P, F>
where
    P: Sender,
    F: SuccessorFactory<P::Values>,
{
    type Values = SuccessorValues<F, P::Values>;
    type Error = ChainError<P, F>;
    type Operation<R>
        = LetValueOperation<P, F, R>
    where
        R: Receiver<Values = Self::Values, Error = Self::Error>;

    const BLOCKING: BlockingKind =
        P::BLOCKING.sequenced_with(<SuccessorOf<F, P::Values> as Sender>::BLOCKING);
    const SENDS_DONE: bool =
        P::SENDS_DONE || <SuccessorOf<F, P::Values> as Sender>::SENDS_DONE;
    const SCHEDULER_AFFINE: bool =
        P::SCHEDULER_AFFINE && <SuccessorOf<F, P::Values> as Sender>::SCHEDULER_AFFINE;

    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = Self::Values, Error = Self::Error>,
    {
        trace!(call_site = %self.call_site, "connecting let-value chain");
        let continuation = PredecessorReceiver::<P::Values, P::Error, F, R> {
            factory: self.factory,
            receiver,
            phase: Phase::PredActive,
            _pred: PhantomData,
        };
        match self.pred.connect(continuation) {
            Ok(inner) => Ok(LetValueOperation { inner }),
            Err(error) => {
                let (continuation, fault) = error.into_parts();
                Err(ConnectError::new(continuation.receiver, fault))
            }
        }
    }

    fn blocking(&self) -> BlockingKind {
        // The successor contributes only its static worst case: which
        // successor will run is unknown until the predecessor completes.
        self.pred
            .blocking()
            .sequenced_with(<SuccessorOf<F, P::Values> as Sender>::BLOCKING)
    }
}

/// Operation for a connected let-value chain.
#[must_use = "operations do nothing unless started"]
pub struct LetValueOperation<P, F, R>
where
    P: Sender,
    F: SuccessorFactory<P::Values>,
    R: Receiver<Values = SuccessorValues<F, P::Values>, Error = ChainError<P, F>>,
{
    inner: P::Operation<PredecessorReceiver<P::Values, P::Error, F, R>>,
}

impl<P, F, R> Operation for LetValueOperation<P, F, R>
where
    P: Sender,
    F: SuccessorFactory<P::Values>,
    R: Receiver<Values = SuccessorValues<F, P::Values>, Error = ChainError<P, F>>,
{
    fn start(self) {
        trace!(phase = ?Phase::PredActive, "starting predecessor");
        self.inner.start();
    }
}

/// Continuation for the predecessor phase.
///
/// Owns the factory and the final consumer. Done and error completions
/// forward directly; a value completion drives the transition to the
/// successor phase.
pub struct PredecessorReceiver<V, E, F, R> {
    factory: F,
    receiver: R,
    phase: Phase,
    _pred: PhantomData<fn() -> (V, E)>,
}

impl<V, E, F, R> Receiver for PredecessorReceiver<V, E, F, R>
where
    F: SuccessorFactory<V>,
    R: Receiver<Values = SuccessorValues<F, V>, Error = LetValueError<E, SuccessorError<F, V>>>,
{
    type Values = V;
    type Error = E;

    fn set_value(self, values: V) {
        debug_assert_eq!(self.phase, Phase::PredActive);
        let Self {
            factory, receiver, ..
        } = self;

        // Predecessor ownership ends here; from this point only the
        // stored values (and, later, the successor continuation) are live.
        let mut storage = ValueStorage::install(values);
        trace!(phase = ?Phase::ValuesOnly, "predecessor delivered values; invoking factory");

        let successor = match factory.build(storage.values_mut()) {
            Ok(successor) => successor,
            Err(fault) => {
                trace!(%fault, "factory failed; releasing values");
                drop(storage);
                receiver.set_error(LetValueError::Link(fault));
                return;
            }
        };

        let continuation: SuccessorReceiver<V, E, SuccessorOf<F, V>, R> = SuccessorReceiver {
            receiver,
            storage,
            phase: Phase::SuccActive,
            _chain: PhantomData,
        };
        match successor.connect(continuation) {
            Ok(operation) => {
                trace!(phase = ?Phase::SuccActive, "successor connected; starting");
                operation.start();
            }
            Err(error) => {
                let (continuation, fault) = error.into_parts();
                trace!(%fault, "successor connection failed; releasing values");
                let SuccessorReceiver {
                    receiver, storage, ..
                } = continuation;
                drop(storage);
                receiver.set_error(LetValueError::Link(fault));
            }
        }
    }

    fn set_done(self) {
        debug_assert_eq!(self.phase, Phase::PredActive);
        self.receiver.set_done();
    }

    fn set_error(self, error: E) {
        debug_assert_eq!(self.phase, Phase::PredActive);
        self.receiver.set_error(LetValueError::Predecessor(error));
    }

    fn env(&self) -> RunEnv {
        self.receiver.env()
    }
}

/// Continuation for the successor phase.
///
/// Owns the final consumer and the value storage; completions forward
/// directly, with successor errors wrapped as
/// [`LetValueError::Successor`].
pub struct SuccessorReceiver<V, E, S, R> {
    receiver: R,
    storage: ValueStorage<V>,
    phase: Phase,
    _chain: PhantomData<fn() -> (E, S)>,
}

impl<V, E, S, R> Receiver for SuccessorReceiver<V, E, S, R>
where
    S: Sender,
    R: Receiver<Values = S::Values, Error = LetValueError<E, S::Error>>,
{
    type Values = S::Values;
    type Error = S::Error;

    fn set_value(self, values: S::Values) {
        debug_assert_eq!(self.phase, Phase::SuccActive);
        let Self {
            receiver, storage, ..
        } = self;
        receiver.set_value(values);
        // Values stay live until the consumer has been completed.
        drop(storage);
    }

    fn set_done(self) {
        debug_assert_eq!(self.phase, Phase::SuccActive);
        let Self {
            receiver, storage, ..
        } = self;
        receiver.set_done();
        drop(storage);
    }

    fn set_error(self, error: S::Error) {
        debug_assert_eq!(self.phase, Phase::SuccActive);
        let Self {
            receiver, storage, ..
        } = self;
        receiver.set_error(LetValueError::Successor(error));
        drop(storage);
    }

    fn env(&self) -> RunEnv {
        self.receiver.env()
    }
}
