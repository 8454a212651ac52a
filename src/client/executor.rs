//! Execution context for asynchronous data-object operations
//!
//! An [`Executor`] wraps a tokio runtime handle. Async clients schedule their
//! work on it through [`Executor::spawn`], which hands back the
//! [`DataObjectFuture`] the blocking facade waits on.

use std::future::Future;
use std::sync::{Arc, OnceLock};

use futures::FutureExt;
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::debug;

use crate::client::client_api::DataObjectFuture;
use crate::client::constants::DEFAULT_THREAD_NAME;
use crate::error::{cause, Cause, Error, Result};

static SHARED: OnceLock<Executor> = OnceLock::new();

/// Executor configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Number of worker threads; `None` uses one per available core
    pub worker_threads: Option<usize>,
    /// Name given to every worker thread
    pub thread_name: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

#[derive(Debug)]
struct OwnedRuntime(Option<Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        // A plain drop blocks, which panics when the last clone goes away
        // inside an async context.
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

/// Worker pool that asynchronous operations are scheduled on
#[derive(Debug, Clone)]
pub struct Executor {
    handle: Handle,
    runtime: Option<Arc<OwnedRuntime>>,
}

impl Executor {
    /// Build an executor that owns a new multi-thread runtime
    pub fn new(config: ExecutorConfig) -> Result<Self> {
        if config.worker_threads == Some(0) {
            return Err(Error::Configuration {
                message: "worker_threads must be greater than zero".to_string(),
            });
        }

        let mut builder = Builder::new_multi_thread();
        builder.enable_all().thread_name(config.thread_name.clone());
        if let Some(worker_threads) = config.worker_threads {
            builder.worker_threads(worker_threads);
        }

        let runtime = builder.build().map_err(|e| Error::Executor {
            reason: format!("Failed to build runtime: {}", e),
        })?;

        debug!(
            thread_name = %config.thread_name,
            worker_threads = ?config.worker_threads,
            "Executor runtime started"
        );

        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(Arc::new(OwnedRuntime(Some(runtime)))),
        })
    }

    /// Wrap an existing runtime; the executor does not own it
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            runtime: None,
        }
    }

    /// Wrap the runtime the caller is currently running inside
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| Error::Executor {
                reason: format!("No runtime in the current context: {}", e),
            })
    }

    /// The process-wide default executor, built on first use
    pub fn shared() -> Result<Self> {
        if let Some(executor) = SHARED.get() {
            return Ok(executor.clone());
        }

        // Losing a race drops the extra runtime in the background.
        let executor = Self::new(ExecutorConfig::default())?;
        Ok(SHARED.get_or_init(|| executor).clone())
    }

    /// The underlying runtime handle
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Whether this executor owns its runtime
    pub fn owns_runtime(&self) -> bool {
        self.runtime.is_some()
    }

    /// Run `future` on the executor's workers.
    ///
    /// A task that panics or is cancelled by runtime shutdown resolves to the
    /// task's `JoinError` as the cause.
    pub fn spawn<T, F>(&self, future: F) -> DataObjectFuture<T>
    where
        T: Send + 'static,
        F: Future<Output = std::result::Result<T, Cause>> + Send + 'static,
    {
        let task = self.handle.spawn(future);
        async move {
            match task.await {
                Ok(result) => result,
                Err(join_error) => Err(cause(join_error)),
            }
        }
        .boxed()
    }
}
