//! The sender/receiver completion protocol.
//!
//! Three traits make up the protocol:
//!
//! - [`Receiver`]: the continuation an operation completes into, exactly
//!   once, on exactly one of three channels
//! - [`Sender`]: an inert description of an asynchronous computation;
//!   connecting it to a receiver yields an operation
//! - [`Operation`]: a connected computation; `start` either completes it
//!   synchronously or hands it to whatever will complete it later
//!
//! Exactly-once completion is structural: receivers and operations are
//! consumed by value, so a double completion or a double start does not
//! compile. Connection is fallible; [`ConnectError`] hands the receiver
//! back so a completion can still be delivered to it.

pub mod receiver;
pub mod sender;

pub use receiver::Receiver;
pub use sender::{ConnectError, Operation, Sender};
