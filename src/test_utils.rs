//! Test helpers: logging setup and capture receivers.
//!
//! Available behind the `test-internals` feature (enabled by default).
//! These helpers exist for this crate's own tests and for downstream
//! integration tests; they are NOT for production use.

use std::sync::{Arc, Mutex, Once};

use crate::protocol::Receiver;
use crate::types::{Outcome, RunEnv};

static INIT: Once = Once::new();

/// Initializes tracing output for tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Respects `RUST_LOG` when set.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "trace".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Logs the start of a test phase.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = $name, "=== phase start ===");
    };
}

/// Logs the completion of a test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "=== test complete ===");
    };
}

/// Asserts a condition, logging expected and actual values on failure.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {
        if !$cond {
            tracing::error!(expected = ?$expected, actual = ?$actual, $msg);
        }
        assert!($cond, "{}: expected {:?}, got {:?}", $msg, $expected, $actual);
    };
}

/// A terminal receiver that records the outcome it observes.
///
/// Created by [`capture`]. The recorded outcome is shared through an
/// `Arc<Mutex<_>>` slot so the test can inspect it after the chain has
/// consumed the receiver.
#[derive(Debug)]
pub struct CaptureReceiver<V, E> {
    slot: Arc<Mutex<Option<Outcome<V, E>>>>,
    env: RunEnv,
}

impl<V, E> CaptureReceiver<V, E> {
    /// Sets the environment this receiver reports to operations beneath
    /// it.
    #[must_use]
    pub fn with_env(mut self, env: RunEnv) -> Self {
        self.env = env;
        self
    }
}

impl<V, E> Receiver for CaptureReceiver<V, E> {
    type Values = V;
    type Error = E;

    fn set_value(self, values: V) {
        *self.slot.lock().expect("capture slot poisoned") = Some(Outcome::Value(values));
    }

    fn set_done(self) {
        *self.slot.lock().expect("capture slot poisoned") = Some(Outcome::Done);
    }

    fn set_error(self, error: E) {
        *self.slot.lock().expect("capture slot poisoned") = Some(Outcome::Error(error));
    }

    fn env(&self) -> RunEnv {
        self.env
    }
}

/// Handle to the outcome recorded by a [`CaptureReceiver`].
#[derive(Debug)]
pub struct CapturedOutcome<V, E> {
    slot: Arc<Mutex<Option<Outcome<V, E>>>>,
}

impl<V, E> CapturedOutcome<V, E> {
    /// Takes the recorded outcome, leaving the slot empty.
    ///
    /// Returns `None` if the chain has not completed.
    pub fn take(&self) -> Option<Outcome<V, E>> {
        self.slot.lock().expect("capture slot poisoned").take()
    }

    /// Returns true if an outcome has been recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slot.lock().expect("capture slot poisoned").is_some()
    }
}

/// Creates a terminal receiver and a handle to the outcome it records.
#[must_use]
pub fn capture<V, E>() -> (CaptureReceiver<V, E>, CapturedOutcome<V, E>) {
    let slot = Arc::new(Mutex::new(None));
    (
        CaptureReceiver {
            slot: Arc::clone(&slot),
            env: RunEnv::detached(),
        },
        CapturedOutcome { slot },
    )
}
