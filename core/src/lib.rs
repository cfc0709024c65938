//! Brewshop Core - Headless Ordering Session for brewshop
//!
//! This crate provides the session state machine for brewshop's
//! single-keystroke ordering experience, completely independent of any UI
//! framework. It can drive a TUI, a remote-shell bridge, or run headless
//! for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                        Hosts                           │
//! │   ┌─────────┐   ┌────────────────┐   ┌─────────────┐   │
//! │   │   TUI   │   │  Remote shell  │   │  Headless   │   │
//! │   │ (term)  │   │    bridge      │   │  (tests)    │   │
//! │   └────┬────┘   └───────┬────────┘   └──────┬──────┘   │
//! │        │                │                   │          │
//! │        └────────────────┴───────────────────┘          │
//! │                         │                              │
//! │              KeyEvent + clock (down)                   │
//! │              ViewState snapshot (up)                   │
//! └─────────────────────────┼──────────────────────────────┘
//!                           │
//! ┌─────────────────────────┼──────────────────────────────┐
//! │                 SESSION CORE                           │
//! │  ┌──────────────────────┴────────────────────────────┐ │
//! │  │              SessionController                    │ │
//! │  │  ┌────────┐ ┌──────┐ ┌───────────┐ ┌───────────┐  │ │
//! │  │  │  Cart  │ │ Auth │ │ Workflows │ │  Timers   │  │ │
//! │  │  └────────┘ └──────┘ └───────────┘ └───────────┘  │ │
//! │  └───────────────────────────────────────────────────┘ │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`SessionController`]: one connected session; routes every key event
//! - [`KeyEvent`]: resolved key input from the host transport
//! - [`ViewState`]: the pure renderable snapshot hosts pull after each event
//! - [`Catalog`] / [`Cart`] / [`AuthSession`]: the session's data model
//! - [`LoginWorkflow`] / [`CheckoutWorkflow`]: the timed multi-step flows
//! - [`TimerQueue`]: deterministic scheduling, driven by the host's clock
//!
//! # Quick Start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use brewshop_core::{Catalog, KeyEvent, Screen, SessionConfig, SessionController};
//!
//! let start = Instant::now();
//! let mut session = SessionController::new(Catalog::coffee(), SessionConfig::default(), start);
//!
//! // Any key dismisses the welcome screen; `s` opens the shop
//! session.handle_key(KeyEvent::char(' '), start);
//! session.handle_key(KeyEvent::char('s'), start);
//! session.handle_key(KeyEvent::char('1'), start);
//! assert_eq!(session.cart().len(), 1);
//!
//! // The host drives time; timed behaviors fire on tick
//! session.tick(start + Duration::from_secs(3));
//! let view = session.snapshot();
//! assert!(view.running);
//! # assert_eq!(session.screen(), Screen::Shop);
//! ```
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on any terminal or UI framework,
//! and it never sleeps: hosts supply the clock. It is pure business logic
//! that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod event;
pub mod session;
pub mod timer;
pub mod view;
pub mod workflow;

// Re-exports for convenience
pub use rust_decimal::Decimal;

pub use auth::{AuthSession, User};
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product, Roast};
pub use config::{default_config_path, ConfigError, SessionConfig};
pub use event::{Key, KeyEvent};
pub use session::{Screen, SessionController};
pub use timer::{TimerAction, TimerId, TimerQueue};
pub use view::{
    CartLineView, CheckoutView, LoginView, ProductView, ScreenView, UserView, ViewState,
};
pub use workflow::checkout::{CheckoutOutcome, CheckoutState, CheckoutWorkflow};
pub use workflow::login::{LoginOutcome, LoginState, LoginWorkflow};
