//! Timed Workflows
//!
//! The two multi-step workflows of the session. Each is a small state
//! machine that, once committed, runs to completion through scheduled
//! continuations with no further per-character interaction:
//!
//! - [`login::LoginWorkflow`]: collect email, collect name, simulated
//!   login latency, commit to the auth session.
//! - [`checkout::CheckoutWorkflow`]: confirm the order, simulated payment
//!   latency, completion display, back to the menu.
//!
//! The workflows own their step state only. The session schedules the
//! timers between steps and applies the side effects (auth commit, cart
//! clear, screen change) when those timers fire, so everything a timer
//! touches stays owned in one place.

pub mod checkout;
pub mod login;
