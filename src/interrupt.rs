//! Cooperative thread interruption
//!
//! Every thread owns an interrupt flag, created lazily the first time it is
//! touched. Another thread raises it through an [`InterruptHandle`]; the owning
//! thread observes it when it next blocks in [`crate::client::wait::block_on`].
//!
//! Consuming the flag with [`interrupted`] clears it. Code that consumes an
//! interruption without fully handling it should call [`interrupt_current`]
//! so the request stays visible further up the stack.
//!
//! ```rust
//! use data_object_sdk::interrupt;
//!
//! interrupt::interrupt_current();
//! assert!(interrupt::is_interrupted());
//! assert!(interrupt::interrupted());
//! assert!(!interrupt::is_interrupted());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, Thread};

pub use crate::error::Interrupted;

#[derive(Debug)]
struct InterruptState {
    flag: AtomicBool,
    thread: Thread,
}

thread_local! {
    static CURRENT: Arc<InterruptState> = Arc::new(InterruptState {
        flag: AtomicBool::new(false),
        thread: thread::current(),
    });
}

/// Handle to one thread's interrupt flag. Cheap to clone and safe to send.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    state: Arc<InterruptState>,
}

impl InterruptHandle {
    /// Raise the flag and wake the thread if it is parked in a wait
    pub fn interrupt(&self) {
        self.state.flag.store(true, Ordering::SeqCst);
        self.state.thread.unpark();
    }

    /// Whether the flag is raised, without clearing it
    pub fn is_interrupted(&self) -> bool {
        self.state.flag.load(Ordering::SeqCst)
    }

    /// Name of the owning thread, if it has one
    pub fn thread_name(&self) -> Option<&str> {
        self.state.thread.name()
    }
}

/// Handle to the calling thread's interrupt flag
pub fn current() -> InterruptHandle {
    CURRENT.with(|state| InterruptHandle {
        state: Arc::clone(state),
    })
}

/// Raise the calling thread's interrupt flag
pub fn interrupt_current() {
    CURRENT.with(|state| state.flag.store(true, Ordering::SeqCst));
}

/// Whether the calling thread's flag is raised, without clearing it
pub fn is_interrupted() -> bool {
    CURRENT.with(|state| state.flag.load(Ordering::SeqCst))
}

/// Test and clear the calling thread's interrupt flag
pub fn interrupted() -> bool {
    CURRENT.with(|state| state.flag.swap(false, Ordering::SeqCst))
}
