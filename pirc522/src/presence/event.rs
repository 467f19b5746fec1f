// pirc522/src/presence/event.rs
//! Binary event raised by the interrupt line.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Shared {
    flag: Mutex<bool>,
    cond: Condvar,
}

/// Single binary event set by the interrupt-line edge callback and awaited
/// by the presence loop. Clones share the same event.
#[derive(Debug, Clone, Default)]
pub struct IrqEvent {
    shared: Arc<Shared>,
}

impl IrqEvent {
    /// A cleared event.
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self) -> MutexGuard<'_, bool> {
        self.shared.flag.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set the event and wake the waiter.
    pub fn signal(&self) {
        *self.flag() = true;
        self.shared.cond.notify_all();
    }

    /// Reset the event.
    pub fn clear(&self) {
        *self.flag() = false;
    }

    /// Whether the event is set, without waiting.
    pub fn is_set(&self) -> bool {
        *self.flag()
    }

    /// Block until the event is set or `timeout` elapses. Returns whether
    /// the event is set. The flag is left as is.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut set = self.flag();
        while !*set {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            set = match self.shared.cond.wait_timeout(set, deadline - now) {
                Ok((guard, _)) => guard,
                Err(e) => e.into_inner().0,
            };
        }
        true
    }
}
