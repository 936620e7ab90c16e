//! Leading-plus-trailing debounce driven by explicit time.

use std::{ops::Sub, time::Duration};

/// Debounces refetches.
///
/// The first call in a quiet period fires at once. Further calls inside the
/// window extend it and collapse into one trailing fire, delivered by the
/// first [`tick`](Self::tick) at least `wait` after the last call.
///
/// Time is supplied by the caller, so simulation can use virtual instants.
#[derive(Debug, Clone)]
pub struct Debouncer<I> {
    wait: Duration,
    /// Time of the last call. `None` once the window has closed.
    last_call: Option<I>,
    trailing: bool,
}

impl<I> Debouncer<I>
where
    I: Copy + Sub<I, Output = Duration>,
{
    /// Window used by list views.
    pub const LIST_WAIT: Duration = Duration::from_millis(500);

    /// Debouncer with the given window.
    pub fn new(wait: Duration) -> Self {
        Self { wait, last_call: None, trailing: false }
    }

    /// Register a call. Returns `true` if it should fire now.
    pub fn call(&mut self, now: I) -> bool {
        let flushed = self.tick(now);
        if self.last_call.is_none() {
            self.last_call = Some(now);
            return true;
        }
        self.last_call = Some(now);
        self.trailing = true;
        flushed
    }

    /// Advance time. Returns `true` if the trailing call fires now.
    pub fn tick(&mut self, now: I) -> bool {
        match self.last_call {
            Some(last) if now - last >= self.wait => {
                self.last_call = None;
                std::mem::take(&mut self.trailing)
            },
            _ => false,
        }
    }

    /// Whether a trailing call is waiting for the window to close.
    pub fn is_pending(&self) -> bool {
        self.trailing
    }
}
