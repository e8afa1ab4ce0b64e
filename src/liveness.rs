//! Fetch-cycle liveness tracking.
//!
//! A view that unmounts while its fetch is still in flight must not apply
//! the stale result. Each fetch cycle takes a [`LivenessTicket`] from the
//! view's [`LivenessFlag`]; the flag is cleared when the view goes away
//! (explicitly or on drop), and the ticket then refuses to hand the result
//! over. The underlying request itself is not cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owned by a mounted view; cleared on unmount.
#[derive(Debug)]
pub struct LivenessFlag {
    live: Arc<AtomicBool>,
}

impl LivenessFlag {
    /// A freshly mounted view's flag.
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Issue a ticket for one fetch cycle.
    pub fn ticket(&self) -> LivenessTicket {
        LivenessTicket {
            live: Arc::clone(&self.live),
        }
    }

    /// Mark the view as gone. Outstanding tickets go dead immediately.
    pub fn clear(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    /// Whether the view is still mounted.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

impl Default for LivenessFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LivenessFlag {
    fn drop(&mut self) {
        // Dropping the flag is the unmount.
        self.clear();
    }
}

/// Travels with one in-flight fetch.
#[derive(Debug, Clone)]
pub struct LivenessTicket {
    live: Arc<AtomicBool>,
}

impl LivenessTicket {
    /// Whether the issuing view is still mounted.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    /// Hand a fetched result over, unless the view went away meanwhile.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_live() {
            Some(value)
        } else {
            None
        }
    }
}
