//! Interruptible blocking wait on an asynchronous outcome
//!
//! [`block_on`] drives a future on the calling thread, parking between polls.
//! The thread's interrupt flag (see [`crate::interrupt`]) is consumed whenever
//! the future is still pending, so a raised flag ends the wait early.

use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread::{self, Thread};

use futures::task::{waker, ArcWake};
use tracing::trace;

use crate::error::{cause, Cause, Interrupted};
use crate::interrupt;

/// How a blocking wait ended
#[derive(Debug)]
pub enum WaitOutcome<T> {
    /// The computation finished, successfully or not
    Completed(Result<T, Cause>),
    /// The waiting thread was interrupted first; carries the interruption
    /// signal. The thread's flag has been consumed.
    Interrupted(Cause),
}

struct ThreadWaker {
    thread: Thread,
}

impl ArcWake for ThreadWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.thread.unpark();
    }
}

/// Block the calling thread until `future` resolves or the thread is
/// interrupted.
///
/// A future that is already complete wins over a raised flag, and the flag is
/// then left as it was. The future is dropped on return either way; work it
/// started elsewhere keeps running.
pub fn block_on<T, F>(future: F) -> WaitOutcome<T>
where
    F: Future<Output = Result<T, Cause>>,
{
    futures::pin_mut!(future);

    let waker = waker(Arc::new(ThreadWaker {
        thread: thread::current(),
    }));
    let mut cx = Context::from_waker(&waker);

    loop {
        if let Poll::Ready(result) = future.as_mut().poll(&mut cx) {
            return WaitOutcome::Completed(result);
        }

        if interrupt::interrupted() {
            trace!("Wait interrupted before the operation completed");
            return WaitOutcome::Interrupted(cause(Interrupted));
        }

        // Both the waker and an interrupt unpark us; spurious wakeups just
        // poll again.
        thread::park();
    }
}
