//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Converts terminal events to core `KeyEvent`s
//! - Drives the session's timers from a frame tick
//! - Renders the session's `ViewState` snapshot each frame
//!
//! All dispatch rules, workflow timing, and cart/auth state live in
//! `brewshop-core`; nothing in this file decides what a keystroke means.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use brewshop_core::{Catalog, Key, KeyEvent, SessionConfig, SessionController};

use crate::render;

/// Frame tick; timers in the core fire with at most this much latency
const FRAME_DURATION: Duration = Duration::from_millis(50);

/// The terminal application
pub struct App {
    session: SessionController,
}

impl App {
    /// Create an App with the standard coffee catalog and loaded config
    pub fn new() -> anyhow::Result<Self> {
        let config = match SessionConfig::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default session config");
                SessionConfig::default()
            }
        };
        let session = SessionController::new(Catalog::coffee(), config, Instant::now());
        Ok(Self { session })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render the welcome screen immediately
        self.draw(terminal)?;

        while self.session.is_running() {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event),
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "terminal event error");
                        }
                        // Input stream ended: the transport is gone
                        None => self.session.on_close(),
                    }
                }

                // Frame tick - fire due timers and re-render
                _ = tokio::time::sleep(FRAME_DURATION) => {}
            }

            self.session.tick(Instant::now());
            self.draw(terminal)?;
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(translated) = translate_key(key) {
                    self.session.handle_key(translated, Instant::now());
                }
            }
            Event::Resize(width, height) => self.session.on_resize(width, height),
            _ => {}
        }
    }

    fn draw(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let view = self.session.snapshot();
        terminal.draw(|frame| render::draw(frame, &view))?;
        Ok(())
    }
}

/// Map a crossterm key event onto the core's input interface.
///
/// Keys the session has no meaning for (arrows, function keys, ...) are
/// dropped here; forwarding them would only be a guaranteed no-op.
fn translate_key(key: event::KeyEvent) -> Option<KeyEvent> {
    let resolved = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace | KeyCode::Delete => Key::Backspace,
        _ => return None,
    };
    Some(KeyEvent {
        key: resolved,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        meta: key.modifiers.contains(KeyModifiers::ALT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent as CtKeyEvent;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_plain_char() {
        let translated = translate_key(CtKeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
        assert_eq!(translated, Some(KeyEvent::char('s')));
    }

    #[test]
    fn test_translate_ctrl_c() {
        let translated = translate_key(CtKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let event = translated.unwrap();
        assert!(event.is_interrupt());
    }

    #[test]
    fn test_translate_editing_keys() {
        assert_eq!(
            translate_key(CtKeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyEvent::enter())
        );
        assert_eq!(
            translate_key(CtKeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyEvent::escape())
        );
        // Delete folds into Backspace
        assert_eq!(
            translate_key(CtKeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)),
            Some(KeyEvent::backspace())
        );
    }

    #[test]
    fn test_unmapped_keys_dropped() {
        assert_eq!(
            translate_key(CtKeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            translate_key(CtKeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            None
        );
    }
}
