//! # Burger Stacker
//!
//! A terminal memory game: rebuild the target burger layer by layer, bottom to
//! top, before the clock runs out. Each matched burger scores one point per
//! layer.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: colors, stacks, round generator, session state machine
//! - [`store`] — High-score persistence
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod store;
pub mod ui;
