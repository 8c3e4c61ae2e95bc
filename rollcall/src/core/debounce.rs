//! Debounce Scheduler
//!
//! Collapses bursts of keystrokes into one deferred action. Each `schedule`
//! pushes the deadline out by the quiescence window and replaces whatever was
//! pending, so an action fires at most once per quiet window.

use std::sync::{Arc, Mutex};

use tokio::time::{Duration, Instant};

/// Default quiescence window
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Time source for the debouncer
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// tokio's clock (honours `tokio::time::pause`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Single-slot trailing-edge debouncer
pub struct Debouncer<A> {
    window: Duration,
    clock: Arc<dyn Clock>,
    pending: Option<(Instant, A)>,
}

impl<A> std::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("deadline", &self.deadline())
            .finish()
    }
}

impl<A> Debouncer<A> {
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, Arc::new(TokioClock))
    }

    pub fn with_clock(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            window,
            clock,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending action and restart the window
    pub fn schedule(&mut self, action: A) {
        let deadline = self.clock.now() + self.window;
        self.pending = Some((deadline, action));
    }

    /// Drop the pending action, returning it
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, action)| action)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the action if its window has elapsed
    pub fn poll_due(&mut self) -> Option<A> {
        let now = self.clock.now();
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.cancel()
        } else {
            None
        }
    }

    /// Sleep until the pending deadline, then take the action.
    ///
    /// Returns `None` immediately when nothing is pending. Only meaningful
    /// with `TokioClock`.
    pub async fn wait_due(&mut self) -> Option<A> {
        let deadline = self.deadline()?;
        tokio::time::sleep_until(deadline).await;
        self.poll_due()
    }
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
