//! Data-object client module
//!
//! This module adapts an asynchronous data-object client into a blocking one:
//! - **[`AsyncDataObjectClient`]** - the asynchronous put/get/delete primitives,
//!   supplied by a storage backend
//! - **[`SdkClient`]** - the blocking facade, implemented for every async client
//! - **[`Executor`]** - the execution context async operations are scheduled on
//! - **[`wait`]** - the interruptible wait the blocking facade is built on
//!
//! # Examples
//!
//! ```rust
//! use data_object_sdk::client::{AsyncDataObjectClient, DataObjectFuture, Executor, SdkClient};
//! use data_object_sdk::error::Cause;
//!
//! struct Echo;
//!
//! impl AsyncDataObjectClient for Echo {
//!     type PutRequest = String;
//!     type PutResponse = String;
//!     type GetRequest = String;
//!     type GetResponse = String;
//!     type DeleteRequest = String;
//!     type DeleteResponse = String;
//!
//!     fn put_data_object_async(&self, request: String, executor: &Executor) -> DataObjectFuture<String> {
//!         executor.spawn(async move { Ok::<_, Cause>(request) })
//!     }
//!
//!     fn get_data_object_async(&self, request: String, executor: &Executor) -> DataObjectFuture<String> {
//!         executor.spawn(async move { Ok::<_, Cause>(request) })
//!     }
//!
//!     fn delete_data_object_async(&self, request: String, executor: &Executor) -> DataObjectFuture<String> {
//!         executor.spawn(async move { Ok::<_, Cause>(request) })
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Echo;
//! assert_eq!(client.put_data_object("doc-1".to_string())?, "doc-1");
//! # Ok(())
//! # }
//! ```

use std::fmt;

pub mod client_api;
pub mod executor;
pub mod wait;

pub use client_api::{AsyncDataObjectClient, DataObjectFuture, SdkClient};
pub use executor::{Executor, ExecutorConfig};
pub use wait::{block_on, WaitOutcome};

/// Client constants
pub mod constants {
    //! Constants used throughout the client module

    /// Thread name prefix for executor worker threads
    pub const DEFAULT_THREAD_NAME: &str = "data-object-worker";
}

/// The data-object operations the facade adapts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Store a data object
    Put,
    /// Fetch a data object
    Get,
    /// Remove a data object
    Delete,
}

impl Operation {
    /// Lowercase name used in messages and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Put => "put",
            Operation::Get => "get",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
