//! Error types for the data-object SDK
//!
//! Two layers live here. [`Error`] is the crate-level `thiserror` enum used by
//! setup code (executors, logging). [`SdkError`] is the single normalized error
//! returned by every blocking data-object operation; it wraps exactly one
//! [`Cause`] and keeps it by identity.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::client::Operation;

/// The originating failure carried by an [`SdkError`].
///
/// Shared rather than boxed so callers can compare it with [`Arc::ptr_eq`]
/// against the failure they handed to the async layer.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Wrap any error into a [`Cause`].
pub fn cause<E>(error: E) -> Cause
where
    E: std::error::Error + Send + Sync + 'static,
{
    Arc::new(error)
}

/// The main error type for setup and configuration paths
#[derive(Error, Debug)]
pub enum Error {
    /// A blocking data-object operation failed
    #[error("SDK error: {0}")]
    Sdk(#[from] SdkError),

    /// The execution context could not be created
    #[error("Executor error: {reason}")]
    Executor {
        /// What went wrong
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },
}

/// Signal recorded when a blocking wait is interrupted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("thread interrupted while waiting for an asynchronous operation")]
pub struct Interrupted;

/// Normalized error raised by the synchronous data-object operations.
///
/// Callers tell a failed computation apart from an interrupted wait by
/// inspecting [`SdkError::cause`], not by matching on different types.
#[derive(Debug, Clone)]
pub struct SdkError {
    operation: Operation,
    cause: Cause,
}

impl SdkError {
    /// Wrap `cause` as the failure of `operation`
    pub fn new(operation: Operation, cause: Cause) -> Self {
        Self { operation, cause }
    }

    /// The operation that failed
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The originating failure, exactly as the async layer produced it
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Consume the error, keeping only its cause
    pub fn into_cause(self) -> Cause {
        self.cause
    }

    /// Downcast the cause to a concrete error type
    pub fn cause_as<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.cause.downcast_ref::<E>()
    }

    /// Whether the cause is an interruption signal
    pub fn is_interrupted(&self) -> bool {
        is_interruption(&self.cause)
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} data object failed: {}", self.operation, self.cause)
    }
}

// Hand-written so `source()` yields the inner error rather than the `Arc`
// wrapping it; downcasting the source must reach the original type.
impl std::error::Error for SdkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Whether `cause` is an interruption signal
pub(crate) fn is_interruption(cause: &Cause) -> bool {
    cause.is::<Interrupted>()
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for blocking data-object operations
pub type SdkResult<T> = std::result::Result<T, SdkError>;
