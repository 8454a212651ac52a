//! Async client trait and the blocking facade built over it
//!
//! A storage backend implements [`AsyncDataObjectClient`]. Every such client
//! gets [`SdkClient`] for free: blocking put/get/delete calls that wait on the
//! async handle and report any failure as one [`SdkError`].

use futures::future::BoxFuture;
use tracing::{debug, trace};

use crate::client::executor::Executor;
use crate::client::wait::{block_on, WaitOutcome};
use crate::client::Operation;
use crate::error::{cause, is_interruption, SdkError, SdkResult};
use crate::interrupt;

/// Pending outcome of one asynchronous data-object operation
pub type DataObjectFuture<T> = BoxFuture<'static, Result<T, crate::error::Cause>>;

/// Asynchronous data-object operations, supplied by a storage backend.
///
/// Requests and responses are whatever the backend defines; they pass through
/// the blocking facade untouched.
pub trait AsyncDataObjectClient: Send + Sync {
    /// Request for storing a data object
    type PutRequest: Send;
    /// Response to a put
    type PutResponse: Send;
    /// Request for fetching a data object
    type GetRequest: Send;
    /// Response to a get
    type GetResponse: Send;
    /// Request for removing a data object
    type DeleteRequest: Send;
    /// Response to a delete
    type DeleteResponse: Send;

    /// Store a data object, scheduling the work on `executor`
    fn put_data_object_async(
        &self,
        request: Self::PutRequest,
        executor: &Executor,
    ) -> DataObjectFuture<Self::PutResponse>;

    /// Fetch a data object, scheduling the work on `executor`
    fn get_data_object_async(
        &self,
        request: Self::GetRequest,
        executor: &Executor,
    ) -> DataObjectFuture<Self::GetResponse>;

    /// Remove a data object, scheduling the work on `executor`
    fn delete_data_object_async(
        &self,
        request: Self::DeleteRequest,
        executor: &Executor,
    ) -> DataObjectFuture<Self::DeleteResponse>;
}

/// Blocking data-object operations.
///
/// Each call invokes the matching async operation exactly once and blocks
/// until it completes. Failures come back as [`SdkError`]:
///
/// - the computation failed: the cause is that failure, and the calling
///   thread's interrupt flag is left alone;
/// - the wait was interrupted, or the computation failed with an
///   interruption: the cause is the interruption signal, and the flag is
///   raised again before returning.
///
/// There is no timeout. A computation that never completes blocks the caller
/// until it is interrupted.
///
/// Do not call these from one of the executor's own worker threads: on a
/// current-thread runtime the parked caller is the only thread that could run
/// the spawned operation, and the call never returns.
pub trait SdkClient: AsyncDataObjectClient {
    /// Store a data object using the shared executor
    fn put_data_object(&self, request: Self::PutRequest) -> SdkResult<Self::PutResponse> {
        with_executor(Operation::Put, Executor::shared(), |executor| {
            self.put_data_object_with_executor(request, executor)
        })
    }

    /// Store a data object using `executor`
    fn put_data_object_with_executor(
        &self,
        request: Self::PutRequest,
        executor: &Executor,
    ) -> SdkResult<Self::PutResponse> {
        await_outcome(
            Operation::Put,
            self.put_data_object_async(request, executor),
        )
    }

    /// Fetch a data object using the shared executor
    fn get_data_object(&self, request: Self::GetRequest) -> SdkResult<Self::GetResponse> {
        with_executor(Operation::Get, Executor::shared(), |executor| {
            self.get_data_object_with_executor(request, executor)
        })
    }

    /// Fetch a data object using `executor`
    fn get_data_object_with_executor(
        &self,
        request: Self::GetRequest,
        executor: &Executor,
    ) -> SdkResult<Self::GetResponse> {
        await_outcome(
            Operation::Get,
            self.get_data_object_async(request, executor),
        )
    }

    /// Remove a data object using the shared executor
    fn delete_data_object(&self, request: Self::DeleteRequest) -> SdkResult<Self::DeleteResponse> {
        with_executor(Operation::Delete, Executor::shared(), |executor| {
            self.delete_data_object_with_executor(request, executor)
        })
    }

    /// Remove a data object using `executor`
    fn delete_data_object_with_executor(
        &self,
        request: Self::DeleteRequest,
        executor: &Executor,
    ) -> SdkResult<Self::DeleteResponse> {
        await_outcome(
            Operation::Delete,
            self.delete_data_object_async(request, executor),
        )
    }
}

impl<C: AsyncDataObjectClient + ?Sized> SdkClient for C {}

/// Run `call` on `executor`, or report why there is no executor to run it on.
///
/// A missing executor is a plain failure: `call` is never made and the
/// interrupt flag is left alone.
fn with_executor<T, F>(
    operation: Operation,
    executor: crate::Result<Executor>,
    call: F,
) -> SdkResult<T>
where
    F: FnOnce(&Executor) -> SdkResult<T>,
{
    let executor = executor.map_err(|e| SdkError::new(operation, cause(e)))?;
    call(&executor)
}

/// Wait for `handle` and normalize its outcome.
///
/// The interrupt flag is raised on the interruption paths only; a plain
/// failure must leave it untouched.
fn await_outcome<T>(operation: Operation, handle: DataObjectFuture<T>) -> SdkResult<T> {
    debug!(%operation, "Waiting for data object operation");

    match block_on(handle) {
        WaitOutcome::Completed(Ok(response)) => {
            trace!(%operation, "Data object operation completed");
            Ok(response)
        }
        WaitOutcome::Completed(Err(failure)) if is_interruption(&failure) => {
            debug!(%operation, "Data object operation failed with an interruption");
            interrupt::interrupt_current();
            Err(SdkError::new(operation, failure))
        }
        WaitOutcome::Completed(Err(failure)) => {
            debug!(%operation, error = %failure, "Data object operation failed");
            Err(SdkError::new(operation, failure))
        }
        WaitOutcome::Interrupted(signal) => {
            debug!(%operation, "Wait interrupted, restoring interrupt flag");
            interrupt::interrupt_current();
            Err(SdkError::new(operation, signal))
        }
    }
}
