//! Single-shot deferred-transition timer for wordmime rooms.
//!
//! A room has at most one pending timed transition at any instant: the
//! maker-encode deadline, the guess-window deadline, or the reveal pause.
//! [`OneShot`] enforces that structurally — it holds a single optional
//! deadline, and arming a new one always replaces whatever was pending.
//! The cancel-before-reschedule discipline is therefore not a convention
//! callers must remember; it is the only thing the type can do.
//!
//! # Integration
//!
//! The timer is designed to sit inside a room actor's `tokio::select!`
//! loop:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(cmd) = cmd_rx.recv() => { /* handle commands */ }
//!         kind = timer.fired() => { /* apply the timed transition */ }
//!     }
//! }
//! ```
//!
//! While disarmed, [`OneShot::fired`] pends forever, so the select loop
//! simply never takes that branch. `fired()` is cancellation safe: if the
//! command branch wins the race, the pending deadline is untouched.

use std::fmt;
use std::time::Duration;

use tokio::time::{self, Instant as TokioInstant};
use tracing::{debug, trace};

/// A single-shot timer carrying a caller-chosen kind tag.
///
/// One `OneShot` per room actor. The kind tag (e.g. "maker deadline"
/// vs. "guess deadline") travels with the deadline, so the state machine
/// can validate a firing against its current phase and treat a stale
/// kind as a no-op instead of corrupting a later phase.
pub struct OneShot<K> {
    armed: Option<(K, TokioInstant)>,
}

impl<K: Copy + fmt::Debug> OneShot<K> {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arms the timer to fire `after` from now, replacing any pending
    /// deadline.
    ///
    /// Replacement IS the cancellation path: the previous deadline, if
    /// any, can never fire once this returns.
    pub fn arm(&mut self, kind: K, after: Duration) {
        if let Some((old, _)) = self.armed {
            trace!(?old, new = ?kind, "replacing pending timer");
        }
        debug!(?kind, after_ms = after.as_millis() as u64, "timer armed");
        self.armed = Some((kind, TokioInstant::now() + after));
    }

    /// Disarms the timer. Returns the kind that was pending, if any.
    pub fn disarm(&mut self) -> Option<K> {
        let prev = self.armed.take().map(|(kind, _)| kind);
        if let Some(kind) = prev {
            debug!(?kind, "timer disarmed");
        }
        prev
    }

    /// Whether a deadline is currently pending.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The kind of the pending deadline, if any.
    pub fn armed_kind(&self) -> Option<K> {
        self.armed.map(|(kind, _)| kind)
    }

    /// Waits until the pending deadline elapses, then disarms and
    /// returns its kind.
    ///
    /// While disarmed this future pends forever — it will never resolve
    /// on its own, but `tokio::select!` still processes other branches.
    pub async fn fired(&mut self) -> K {
        let deadline = match self.armed {
            Some((_, at)) => at,
            None => {
                // Never completes; the actor's other branches still run.
                std::future::pending::<()>().await;
                unreachable!()
            }
        };

        time::sleep_until(deadline).await;

        // Only reached when the sleep actually completed, so the
        // deadline is still the one we started waiting on.
        let (kind, _) = self.armed.take().expect("deadline was armed");
        trace!(?kind, "timer fired");
        kind
    }
}

impl<K: Copy + fmt::Debug> Default for OneShot<K> {
    fn default() -> Self {
        Self::new()
    }
}
