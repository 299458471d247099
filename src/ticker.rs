//! Restartable periodic trigger with idempotent start/stop.
//!
//! The ticker only owns the guard logic around a host interval handle; the
//! actual scheduling call is injected by the caller, which keeps this
//! testable off-browser. Starting while armed and stopping while idle are
//! both no-ops, so at most one host timer ever runs.

/// Wrapper around a host interval timer handle.
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<i32>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Arms the timer. `schedule` runs only when no timer is armed and must
    /// return the host's handle. Returns false when already armed.
    pub fn start_with(&mut self, schedule: impl FnOnce() -> i32) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(schedule());
        true
    }

    /// Disarms the timer, handing the live handle to `cancel`. Returns false
    /// when no timer was armed.
    pub fn stop_with(&mut self, cancel: impl FnOnce(i32)) -> bool {
        match self.handle.take() {
            Some(handle) => {
                cancel(handle);
                true
            }
            None => false,
        }
    }
}
