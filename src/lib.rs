//! Bindlet: allocation-conscious let-value combinator for sender/receiver
//! structured concurrency.
//!
//! # Overview
//!
//! Bindlet implements the *let-value* building block of a sender/receiver
//! framework: run a predecessor computation, feed the values it produces
//! into a factory, run the successor computation the factory returns, and
//! forward the successor's completion to the final consumer. Completion is
//! a three-channel protocol (value / done / error); exactly one channel
//! fires exactly once per operation, enforced structurally by
//! move-consuming receivers rather than by runtime bookkeeping.
//!
//! # Core Guarantees
//!
//! - **Exactly-once completion**: receivers are consumed by value; a second
//!   completion does not compile
//! - **No leak, no double release**: each continuation owns exactly the
//!   members that are live in its phase; stored values live for the entire
//!   successor phase and are released on every failure path
//! - **Factory invoked at most once**: the factory is an `FnOnce`-style
//!   value moved into the chain at connect time
//! - **Faults terminate the chain**: a failed factory invocation or
//!   successor connection is converted to a uniform [`LinkFault`] and
//!   forwarded on the error channel, never retried, never swallowed
//! - **Invisible to introspection**: out-of-band [`RunEnv`] queries made
//!   against either sub-operation are answered by the final consumer
//!
//! # Module Structure
//!
//! - [`types`]: core types (outcomes, blocking classification, call sites,
//!   link faults, execution environment)
//! - [`protocol`]: the sender/receiver/operation traits and connect errors
//! - [`sender`]: leaf senders (`just`, `just_done`, `just_error`, `Either`)
//! - [`combinator`]: the let-value combinator itself
//! - [`test_utils`]: capture receivers and logging helpers (requires the
//!   `test-internals` feature)
//!
//! # Example
//!
//! ```
//! use bindlet::sender::just;
//! use bindlet::{Operation, Outcome, Sender, SenderExt};
//!
//! let (consumer, seen) = bindlet::test_utils::capture();
//! let chain = just::<i32, ()>(42).let_value(|n: &mut i32| just::<i32, ()>(*n * 2));
//! chain
//!     .connect(consumer)
//!     .expect("leaf senders always connect")
//!     .start();
//! assert!(matches!(seen.take(), Some(Outcome::Value(84))));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod combinator;
pub mod protocol;
pub mod sender;
pub mod types;

#[cfg(feature = "test-internals")]
pub mod test_utils;

mod tracing_compat;

pub use combinator::let_value::{LetValue, LetValueError, SuccessorFactory, let_value};
pub use combinator::SenderExt;
pub use protocol::{ConnectError, Operation, Receiver, Sender};
pub use types::{
    BlockingKind, CallSite, LinkFault, LinkStage, Outcome, RunEnv, SchedulerId,
};
