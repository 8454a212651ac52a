//! # Data Object SDK
//!
//! Blocking access to asynchronous data-object stores. A backend supplies
//! asynchronous put, get and delete operations; this crate turns them into
//! blocking calls with one error type and accurate interrupt state.
//!
//! ## Features
//!
//! - **Client Module**: the async client trait, the blocking facade and the
//!   executor async operations run on
//! - **Interrupt Module**: per-thread interrupt flags for cancelling blocking waits
//! - **Error Module**: the normalized [`SdkError`] and crate-level [`Error`]
//!
//! ## Example
//!
//! ```rust
//! use data_object_sdk::prelude::*;
//!
//! // A thread blocked in a data-object call can be interrupted from elsewhere
//! let handle = interrupt::current();
//! handle.interrupt();
//! assert!(interrupt::interrupted());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result, SdkError, SdkResult};

// Core modules
pub mod client;
pub mod error;
pub mod interrupt;
pub mod logging;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::client::{
        AsyncDataObjectClient, DataObjectFuture, Executor, ExecutorConfig, Operation, SdkClient,
    };
    pub use crate::error::{cause, Cause, Error, Interrupted, Result, SdkError, SdkResult};
    pub use crate::interrupt::{self, InterruptHandle};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
