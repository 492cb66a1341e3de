//! Immediate-completion senders.
//!
//! `just`, `just_done`, and `just_error` complete inline on the value,
//! done, and error channel respectively, the moment their operation is
//! started. They are the leaves most chains bottom out in and the
//! predecessors of choice in tests.

use core::marker::PhantomData;

use crate::protocol::{ConnectError, Operation, Receiver, Sender};
use crate::types::BlockingKind;

/// A sender that completes inline with the given values.
///
/// The error channel type is a free parameter (default
/// [`core::convert::Infallible`]) so a `Just` can slot into any chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "senders do nothing unless connected and started"]
pub struct Just<V, E = core::convert::Infallible> {
    values: V,
    _error: PhantomData<fn() -> E>,
}

/// Creates a sender that completes inline with `values`.
pub fn just<V, E>(values: V) -> Just<V, E> {
    Just {
        values,
        _error: PhantomData,
    }
}

impl<V, E> Sender for Just<V, E> {
    type Values = V;
    type Error = E;
    type Operation<R>
        = JustOperation<R>
    where
        R: Receiver<Values = V, Error = E>;

    const BLOCKING: BlockingKind = BlockingKind::AlwaysInline;
    const SENDS_DONE: bool = false;
    const SCHEDULER_AFFINE: bool = true;

    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = V, Error = E>,
    {
        Ok(JustOperation {
            values: self.values,
            receiver,
        })
    }
}

/// Operation for [`Just`].
#[derive(Debug)]
#[must_use = "operations do nothing unless started"]
pub struct JustOperation<R: Receiver> {
    values: R::Values,
    receiver: R,
}

impl<R: Receiver> Operation for JustOperation<R> {
    fn start(self) {
        self.receiver.set_value(self.values);
    }
}

/// A sender that completes inline on the done channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "senders do nothing unless connected and started"]
pub struct JustDone<V, E = core::convert::Infallible> {
    _channels: PhantomData<fn() -> (V, E)>,
}

/// Creates a sender that completes inline on the done channel.
pub fn just_done<V, E>() -> JustDone<V, E> {
    JustDone {
        _channels: PhantomData,
    }
}

impl<V, E> Sender for JustDone<V, E> {
    type Values = V;
    type Error = E;
    type Operation<R>
        = JustDoneOperation<R>
    where
        R: Receiver<Values = V, Error = E>;

    const BLOCKING: BlockingKind = BlockingKind::AlwaysInline;
    const SENDS_DONE: bool = true;
    const SCHEDULER_AFFINE: bool = true;

    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = V, Error = E>,
    {
        Ok(JustDoneOperation { receiver })
    }
}

/// Operation for [`JustDone`].
#[derive(Debug)]
#[must_use = "operations do nothing unless started"]
pub struct JustDoneOperation<R: Receiver> {
    receiver: R,
}

impl<R: Receiver> Operation for JustDoneOperation<R> {
    fn start(self) {
        self.receiver.set_done();
    }
}

/// A sender that completes inline with the given error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "senders do nothing unless connected and started"]
pub struct JustError<V, E> {
    error: E,
    _values: PhantomData<fn() -> V>,
}

/// Creates a sender that completes inline with `error`.
pub fn just_error<V, E>(error: E) -> JustError<V, E> {
    JustError {
        error,
        _values: PhantomData,
    }
}

impl<V, E> Sender for JustError<V, E> {
    type Values = V;
    type Error = E;
    type Operation<R>
        = JustErrorOperation<R>
    where
        R: Receiver<Values = V, Error = E>;

    const BLOCKING: BlockingKind = BlockingKind::AlwaysInline;
    const SENDS_DONE: bool = false;
    const SCHEDULER_AFFINE: bool = true;

    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = V, Error = E>,
    {
        Ok(JustErrorOperation {
            error: self.error,
            receiver,
        })
    }
}

/// Operation for [`JustError`].
#[derive(Debug)]
#[must_use = "operations do nothing unless started"]
pub struct JustErrorOperation<R: Receiver> {
    error: R::Error,
    receiver: R,
}

impl<R: Receiver> Operation for JustErrorOperation<R> {
    fn start(self) {
        self.receiver.set_error(self.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{capture, init_test_logging};
    use crate::types::Outcome;

    fn init_test(test_name: &str) {
        init_test_logging();
        crate::test_phase!(test_name);
    }

    #[test]
    fn just_completes_with_values() {
        init_test("just_completes_with_values");
        let (consumer, seen) = capture::<i32, &str>();
        just(42)
            .connect(consumer)
            .expect("just always connects")
            .start();
        assert_eq!(seen.take(), Some(Outcome::Value(42)));
        crate::test_complete!("just_completes_with_values");
    }

    #[test]
    fn just_done_completes_on_done_channel() {
        init_test("just_done_completes_on_done_channel");
        let (consumer, seen) = capture::<i32, &str>();
        just_done::<i32, &str>()
            .connect(consumer)
            .expect("just_done always connects")
            .start();
        assert_eq!(seen.take(), Some(Outcome::Done));
        crate::test_complete!("just_done_completes_on_done_channel");
    }

    #[test]
    fn just_error_completes_with_error() {
        init_test("just_error_completes_with_error");
        let (consumer, seen) = capture::<i32, &str>();
        just_error::<i32, &str>("boom")
            .connect(consumer)
            .expect("just_error always connects")
            .start();
        assert_eq!(seen.take(), Some(Outcome::Error("boom")));
        crate::test_complete!("just_error_completes_with_error");
    }

    #[test]
    fn metadata() {
        init_test("metadata");
        assert_eq!(Just::<i32>::BLOCKING, BlockingKind::AlwaysInline);
        assert!(!Just::<i32>::SENDS_DONE);
        assert!(JustDone::<i32, &str>::SENDS_DONE);
        assert!(Just::<i32>::SCHEDULER_AFFINE);
        crate::test_complete!("metadata");
    }
}
