//! Checkout Workflow
//!
//! Confirm the itemized order, then a simulated payment latency, then a
//! completion display before the session clears the cart and returns to
//! the menu. Declining at the confirm step is the only exit; once the
//! order is confirmed the workflow always runs to completion.

use serde::{Deserialize, Serialize};

use crate::event::{Key, KeyEvent};

/// Checkout workflow step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// Not in checkout mode
    #[default]
    Idle,
    /// Showing the order summary; accepts Y/N only
    Confirming,
    /// Simulated payment latency; no input accepted
    Processing,
    /// Completion display; no input accepted
    Complete,
}

/// What a key event did to the workflow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Key was ignored
    Continue,
    /// User declined; workflow is back to `Idle`, cart untouched
    Declined,
    /// User confirmed; workflow entered `Processing` and the session
    /// should schedule the payment timer
    Confirmed,
}

/// The checkout state machine.
///
/// Preconditions (non-empty cart, logged-in user) are the session's to
/// check before calling [`CheckoutWorkflow::start`]; the workflow itself
/// only sequences steps.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CheckoutWorkflow {
    state: CheckoutState,
}

impl CheckoutWorkflow {
    /// Create an idle workflow
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter checkout mode. No-op unless idle.
    pub fn start(&mut self) {
        if self.state == CheckoutState::Idle {
            tracing::debug!("checkout workflow started");
            self.state = CheckoutState::Confirming;
        }
    }

    /// Whether the workflow is anywhere past `Idle`
    pub fn is_active(&self) -> bool {
        self.state != CheckoutState::Idle
    }

    /// Current step
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Route a key event to the confirm step.
    ///
    /// Only `Confirming` accepts input, and only y/Y and n/N.
    pub fn handle_key(&mut self, event: KeyEvent) -> CheckoutOutcome {
        if self.state != CheckoutState::Confirming {
            return CheckoutOutcome::Continue;
        }
        match event.key {
            Key::Char(c) if c.eq_ignore_ascii_case(&'y') => {
                self.state = CheckoutState::Processing;
                tracing::debug!("order confirmed, simulating payment");
                CheckoutOutcome::Confirmed
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&'n') => {
                self.state = CheckoutState::Idle;
                tracing::debug!("order declined");
                CheckoutOutcome::Declined
            }
            _ => CheckoutOutcome::Continue,
        }
    }

    /// Payment latency elapsed: move to the completion display.
    ///
    /// Called by the session when the processing timer fires. Returns
    /// whether the transition happened (it only can from `Processing`).
    pub fn finish_processing(&mut self) -> bool {
        if self.state == CheckoutState::Processing {
            self.state = CheckoutState::Complete;
            true
        } else {
            false
        }
    }

    /// Completion display elapsed: reset to `Idle`.
    ///
    /// Returns whether the workflow was in `Complete`; the session clears
    /// the cart and routes back to the menu only when it was.
    pub fn finish_complete(&mut self) -> bool {
        if self.state == CheckoutState::Complete {
            self.state = CheckoutState::Idle;
            true
        } else {
            false
        }
    }

    /// Drop back to `Idle` from any step
    pub fn reset(&mut self) {
        self.state = CheckoutState::Idle;
    }
}
