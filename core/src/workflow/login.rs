//! Login Workflow
//!
//! A timed two-field text collection: email, then display name, then a
//! simulated login latency before the credentials are committed. Escape
//! cancels while a field is being typed; once the workflow reaches
//! `Processing` it is committed and cannot be cancelled.

use serde::{Deserialize, Serialize};

use crate::event::{Key, KeyEvent};

/// Login workflow step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginState {
    /// Not in login mode
    #[default]
    Idle,
    /// Typing the email field
    CollectingEmail,
    /// Typing the name field
    CollectingName,
    /// Simulated latency; no input accepted
    Processing,
}

/// What a key event did to the workflow.
///
/// The session uses this to decide what to schedule or tear down; the
/// workflow itself never touches timers or the auth session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Key was ignored (or edited the buffer)
    Continue,
    /// User cancelled; workflow is back to `Idle`, nothing staged
    Cancelled,
    /// Both fields accepted; workflow entered `Processing` and the
    /// session should schedule the completion timer
    Committed,
}

/// The login state machine
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginWorkflow {
    state: LoginState,
    buffer: String,
    staged_email: String,
    staged_name: String,
}

impl LoginWorkflow {
    /// Create an idle workflow
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter login mode. No-op unless idle.
    pub fn start(&mut self) {
        if self.state == LoginState::Idle {
            tracing::debug!("login workflow started");
            self.state = LoginState::CollectingEmail;
        }
    }

    /// Whether the workflow is anywhere past `Idle`
    pub fn is_active(&self) -> bool {
        self.state != LoginState::Idle
    }

    /// Current step
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// The text typed so far for the current field
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Route a key event to the active field.
    ///
    /// Printable characters append, Backspace erases, Enter accepts the
    /// field, Escape cancels. In `Processing` every key is ignored - the
    /// workflow is committed.
    pub fn handle_key(&mut self, event: KeyEvent) -> LoginOutcome {
        match self.state {
            LoginState::Idle | LoginState::Processing => LoginOutcome::Continue,
            LoginState::CollectingEmail => match event.key {
                Key::Enter => {
                    self.staged_email = std::mem::take(&mut self.buffer);
                    self.state = LoginState::CollectingName;
                    LoginOutcome::Continue
                }
                Key::Escape => {
                    self.reset();
                    LoginOutcome::Cancelled
                }
                Key::Backspace => {
                    self.buffer.pop();
                    LoginOutcome::Continue
                }
                Key::Char(_) => {
                    if let Some(c) = event.printable() {
                        self.buffer.push(c);
                    }
                    LoginOutcome::Continue
                }
            },
            LoginState::CollectingName => match event.key {
                Key::Enter => {
                    self.staged_name = std::mem::take(&mut self.buffer);
                    self.state = LoginState::Processing;
                    tracing::debug!("login committed, awaiting simulated latency");
                    LoginOutcome::Committed
                }
                Key::Escape => {
                    self.reset();
                    LoginOutcome::Cancelled
                }
                Key::Backspace => {
                    self.buffer.pop();
                    LoginOutcome::Continue
                }
                Key::Char(_) => {
                    if let Some(c) = event.printable() {
                        self.buffer.push(c);
                    }
                    LoginOutcome::Continue
                }
            },
        }
    }

    /// Take the staged credentials and reset to `Idle`.
    ///
    /// Called by the session when the completion timer fires. Only
    /// meaningful in `Processing`; returns `None` otherwise.
    pub fn complete(&mut self) -> Option<(String, String)> {
        if self.state != LoginState::Processing {
            return None;
        }
        let email = std::mem::take(&mut self.staged_email);
        let name = std::mem::take(&mut self.staged_name);
        self.state = LoginState::Idle;
        Some((email, name))
    }

    /// Drop all staged state and return to `Idle`
    pub fn reset(&mut self) {
        self.state = LoginState::Idle;
        self.buffer.clear();
        self.staged_email.clear();
        self.staged_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_text(wf: &mut LoginWorkflow, text: &str) {
        for c in text.chars() {
            wf.handle_key(KeyEvent::char(c));
        }
    }

    #[test]
    fn test_happy_path_stages_both_fields() {
        let mut wf = LoginWorkflow::new();
        wf.start();
        assert_eq!(wf.state(), LoginState::CollectingEmail);

        type_text(&mut wf, "a@b.com");
        assert_eq!(wf.buffer(), "a@b.com");
        assert_eq!(wf.handle_key(KeyEvent::enter()), LoginOutcome::Continue);
        assert_eq!(wf.state(), LoginState::CollectingName);
        assert_eq!(wf.buffer(), "");

        type_text(&mut wf, "Jane");
        assert_eq!(wf.handle_key(KeyEvent::enter()), LoginOutcome::Committed);
        assert_eq!(wf.state(), LoginState::Processing);

        assert_eq!(
            wf.complete(),
            Some(("a@b.com".to_string(), "Jane".to_string()))
        );
        assert_eq!(wf.state(), LoginState::Idle);
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut wf = LoginWorkflow::new();
        wf.start();
        type_text(&mut wf, "ab");
        wf.handle_key(KeyEvent::backspace());
        assert_eq!(wf.buffer(), "a");
        // Backspace on an empty buffer is a no-op
        wf.handle_key(KeyEvent::backspace());
        wf.handle_key(KeyEvent::backspace());
        assert_eq!(wf.buffer(), "");
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let mut wf = LoginWorkflow::new();
        wf.start();
        wf.handle_key(KeyEvent::ctrl('x'));
        assert_eq!(wf.buffer(), "");
    }

    #[test]
    fn test_escape_cancels_while_collecting() {
        let mut wf = LoginWorkflow::new();
        wf.start();
        type_text(&mut wf, "someone@shop.test");
        wf.handle_key(KeyEvent::enter());
        type_text(&mut wf, "Som");

        assert_eq!(wf.handle_key(KeyEvent::escape()), LoginOutcome::Cancelled);
        assert_eq!(wf.state(), LoginState::Idle);
        assert!(!wf.is_active());
        // Nothing staged survives cancellation
        assert_eq!(wf.complete(), None);
    }

    #[test]
    fn test_processing_ignores_all_input() {
        let mut wf = LoginWorkflow::new();
        wf.start();
        wf.handle_key(KeyEvent::enter());
        wf.handle_key(KeyEvent::enter());
        assert_eq!(wf.state(), LoginState::Processing);

        assert_eq!(wf.handle_key(KeyEvent::escape()), LoginOutcome::Continue);
        assert_eq!(wf.handle_key(KeyEvent::char('x')), LoginOutcome::Continue);
        assert_eq!(wf.state(), LoginState::Processing);
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        // Observed permissive behavior: Enter on empty buffers still logs in
        let mut wf = LoginWorkflow::new();
        wf.start();
        wf.handle_key(KeyEvent::enter());
        assert_eq!(wf.handle_key(KeyEvent::enter()), LoginOutcome::Committed);
        assert_eq!(wf.complete(), Some((String::new(), String::new())));
    }
}
