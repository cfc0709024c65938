//! Brewshop TUI - Terminal interface for brewshop
//!
//! This crate is a thin display client: it decodes terminal events into
//! core key events, drives the session's timers from a frame tick, and
//! renders whatever [`brewshop_core::ViewState`] says to show. All
//! ordering logic lives in `brewshop-core`.

pub mod app;
pub mod render;
pub mod theme;

pub use app::App;
