//! Key Events
//!
//! Events sent from host transports to the session core. A host (terminal
//! client, remote shell bridge, test harness) decodes its raw input bytes
//! into these resolved events; the core never parses protocol bytes itself.
//!
//! # Design Philosophy
//!
//! Hosts are "dumb" transports that forward what the user pressed. They
//! don't interpret what keys mean - the session decides how to respond.

use serde::{Deserialize, Serialize};

/// A resolved key, already decoded from the transport's raw bytes.
///
/// Only the keys the session reacts to are distinguished. Everything else
/// a terminal can produce (arrows, function keys, ...) is simply not
/// forwarded by hosts, which is equivalent to the silent no-op the session
/// would apply anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A printable character (case preserved)
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace or Delete (both erase the last typed character)
    Backspace,
}

/// A key event with modifier flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The resolved key
    pub key: Key,
    /// Control was held
    pub ctrl: bool,
    /// Meta/Alt was held
    pub meta: bool,
}

impl KeyEvent {
    /// Create an event with no modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// A plain character press
    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    /// A character press with Control held (e.g. Ctrl+C)
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            meta: false,
        }
    }

    /// Enter / Return
    pub fn enter() -> Self {
        Self::new(Key::Enter)
    }

    /// Escape
    pub fn escape() -> Self {
        Self::new(Key::Escape)
    }

    /// Backspace / Delete
    pub fn backspace() -> Self {
        Self::new(Key::Backspace)
    }

    /// The character this event types into a text field, if any.
    ///
    /// Control/meta chords are commands, not text, so they return `None`.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.ctrl && !self.meta => Some(c),
            _ => None,
        }
    }

    /// Whether this is the interrupt chord (Ctrl+C)
    pub fn is_interrupt(&self) -> bool {
        self.ctrl && matches!(self.key, Key::Char('c') | Key::Char('C'))
    }
}
