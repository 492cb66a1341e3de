//! Core types for the bindlet protocol.
//!
//! This module contains the fundamental types used throughout the crate:
//!
//! - [`outcome`]: three-channel completion result
//! - [`blocking`]: blocking classification lattice
//! - [`callsite`]: diagnostic call-site attribution
//! - [`fault`]: uniform internal-failure representation
//! - [`env`]: execution-environment introspection surface

pub mod blocking;
pub mod callsite;
pub mod env;
pub mod fault;
pub mod outcome;

pub use blocking::BlockingKind;
pub use callsite::CallSite;
pub use env::{RunEnv, SchedulerId};
pub use fault::{LinkFault, LinkStage};
pub use outcome::Outcome;
