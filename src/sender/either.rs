//! Sum sender over two concrete sender types.
//!
//! A successor factory often wants to return a different concrete sender
//! depending on which shape of values the predecessor produced. [`Either`]
//! makes that a closed, exhaustively checked sum: both arms must agree on
//! the channel types, channel metadata is the worst case of both arms, the
//! blocking classification keeps only a guarantee both arms make, and
//! connect dispatches to whichever arm is present.

use crate::protocol::{ConnectError, Operation, Receiver, Sender};
use crate::types::BlockingKind;

/// One of two senders with identical value and error channel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "senders do nothing unless connected and started"]
pub enum Either<A, B> {
    /// The first alternative.
    Left(A),
    /// The second alternative.
    Right(B),
}

impl<A, B> Sender for Either<A, B>
where
    A: Sender,
    B: Sender<Values = A::Values, Error = A::Error>,
{
    type Values = A::Values;
    type Error = A::Error;
    type Operation<R>
        = EitherOperation<A::Operation<R>, B::Operation<R>>
    where
        R: Receiver<Values = A::Values, Error = A::Error>;

    // Which arm runs is unknown statically, so only a guarantee shared by
    // both arms survives. The instance-level blocking() refines this once
    // the arm is known.
    const BLOCKING: BlockingKind = A::BLOCKING.alternative_with(B::BLOCKING);
    const SENDS_DONE: bool = A::SENDS_DONE || B::SENDS_DONE;
    const SCHEDULER_AFFINE: bool = A::SCHEDULER_AFFINE && B::SCHEDULER_AFFINE;

    fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
    where
        R: Receiver<Values = A::Values, Error = A::Error>,
    {
        match self {
            Self::Left(sender) => sender.connect(receiver).map(EitherOperation::Left),
            Self::Right(sender) => sender.connect(receiver).map(EitherOperation::Right),
        }
    }

    fn blocking(&self) -> BlockingKind {
        match self {
            Self::Left(sender) => sender.blocking(),
            Self::Right(sender) => sender.blocking(),
        }
    }
}

/// Operation for [`Either`].
#[derive(Debug)]
#[must_use = "operations do nothing unless started"]
pub enum EitherOperation<L, R> {
    /// Operation of the first alternative.
    Left(L),
    /// Operation of the second alternative.
    Right(R),
}

impl<L: Operation, R: Operation> Operation for EitherOperation<L, R> {
    fn start(self) {
        match self {
            Self::Left(operation) => operation.start(),
            Self::Right(operation) => operation.start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::{Just, JustDone, just, just_done};
    use crate::test_utils::{capture, init_test_logging};
    use crate::types::Outcome;
    use core::marker::PhantomData;

    fn init_test(test_name: &str) {
        init_test_logging();
        crate::test_phase!(test_name);
    }

    /// A sender whose operation never delivers a completion.
    #[derive(Debug, Clone, Copy)]
    struct Pending<V, E> {
        _channels: PhantomData<fn() -> (V, E)>,
    }

    fn pending<V, E>() -> Pending<V, E> {
        Pending {
            _channels: PhantomData,
        }
    }

    struct PendingOperation<R> {
        _receiver: R,
    }

    impl<R> Operation for PendingOperation<R> {
        fn start(self) {}
    }

    impl<V, E> Sender for Pending<V, E> {
        type Values = V;
        type Error = E;
        type Operation<R>
            = PendingOperation<R>
        where
            R: Receiver<Values = V, Error = E>;

        const BLOCKING: BlockingKind = BlockingKind::Never;
        const SENDS_DONE: bool = false;

        fn connect<R>(self, receiver: R) -> Result<Self::Operation<R>, ConnectError<R>>
        where
            R: Receiver<Values = V, Error = E>,
        {
            Ok(PendingOperation {
                _receiver: receiver,
            })
        }
    }

    #[test]
    fn dispatches_to_the_live_arm() {
        init_test("dispatches_to_the_live_arm");
        let left: Either<Just<i32, &str>, JustDone<i32, &str>> = Either::Left(just(5));
        let (consumer, seen) = capture::<i32, &str>();
        left.connect(consumer).expect("leaf arms connect").start();
        assert_eq!(seen.take(), Some(Outcome::Value(5)));

        let right: Either<Just<i32, &str>, JustDone<i32, &str>> = Either::Right(just_done());
        let (consumer, seen) = capture::<i32, &str>();
        right.connect(consumer).expect("leaf arms connect").start();
        assert_eq!(seen.take(), Some(Outcome::Done));
        crate::test_complete!("dispatches_to_the_live_arm");
    }

    #[test]
    fn metadata_is_worst_case_of_both_arms() {
        init_test("metadata_is_worst_case_of_both_arms");
        type Both = Either<Just<i32, &'static str>, JustDone<i32, &'static str>>;
        assert_eq!(Both::BLOCKING, BlockingKind::AlwaysInline);
        assert!(Both::SENDS_DONE);
        assert!(Both::SCHEDULER_AFFINE);
        crate::test_complete!("metadata_is_worst_case_of_both_arms");
    }

    #[test]
    fn disagreeing_arms_drop_the_blocking_guarantee() {
        init_test("disagreeing_arms_drop_the_blocking_guarantee");
        type Mixed = Either<Just<i32, &'static str>, Pending<i32, &'static str>>;
        // The pending arm violates any inline-completion promise, so the
        // sum must not advertise one.
        assert_eq!(Mixed::BLOCKING, BlockingKind::Maybe);
        assert!(!Mixed::BLOCKING.is_always_complete_inline());

        let (consumer, seen) = capture::<i32, &str>();
        let mixed: Mixed = Either::Right(pending());
        mixed.connect(consumer).expect("pending connects").start();
        assert!(!seen.is_complete(), "no completion arrives inline");
        crate::test_complete!("disagreeing_arms_drop_the_blocking_guarantee");
    }
}
