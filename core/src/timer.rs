//! Timer Queue
//!
//! Deterministic scheduling for the session's timed continuations: the
//! welcome auto-dismiss, the transient "added to cart" notice, and the
//! simulated latencies inside the login and checkout workflows.
//!
//! # Design Philosophy
//!
//! The core never sleeps and never owns a runtime. Hosts supply the current
//! `Instant` on every call, and fire due timers by polling
//! [`TimerQueue::fire_due`] from their own tick. That keeps every timed
//! behavior fully testable with a fake clock, and because the queue is
//! owned by the session, tearing the session down drops every pending
//! timer with it - a callback can never fire against destroyed state.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Handle to a scheduled timer, usable for cancellation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerId(u64);

/// Every timed continuation in the session.
///
/// A timer carries an action rather than a closure so firing stays a plain
/// state transition on the session, with nothing captured that could
/// outlive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    /// The welcome screen's auto-transition to the main menu
    DismissWelcome,
    /// Clear the shop screen's transient "added to cart" notice
    ClearAddedNotice,
    /// Login workflow: simulated latency elapsed, commit the credentials
    CompleteLogin,
    /// Checkout workflow: payment processing elapsed, show completion
    FinishCheckoutProcessing,
    /// Checkout workflow: completion display elapsed, return to menu
    FinishCheckoutComplete,
}

#[derive(Clone, Debug)]
struct TimerEntry {
    id: TimerId,
    deadline: Instant,
    seq: u64,
    action: TimerAction,
}

/// Pending timers, owned by the session.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
    next_id: u64,
}

impl TimerQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        let seq = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline: now + delay,
            seq,
            action,
        });
        tracing::trace!(?action, delay_ms = delay.as_millis() as u64, "timer scheduled");
        id
    }

    /// Cancel a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel everything. Called on session teardown.
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(pending = self.entries.len(), "cancelling all timers");
        }
        self.entries.clear();
    }

    /// Remove and return all actions whose deadline has passed.
    ///
    /// Fired actions come back in deadline order; equal deadlines fall back
    /// to schedule order, though nothing in the session relies on tie order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut due: Vec<TimerEntry> = Vec::new();
        self.entries.retain(|e| {
            if e.deadline <= now {
                due.push(e.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| e.action).collect()
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
