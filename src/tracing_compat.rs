//! Optional tracing integration.
//!
//! When the `tracing-integration` feature is enabled, the macros below are
//! the real `tracing` macros. When disabled they compile to no-ops, so the
//! hot path carries zero logging overhead.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing-integration"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use trace;
