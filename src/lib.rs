//! # Connect Four
//!
//! A two-player Connect Four engine: a 7x6 gravity board, four-in-a-row
//! detection over any grid snapshot, and a pluggable [`agent::Agent`] seat
//! that picks columns from a read-only copy of the board.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, player colors, game session
//! - [`agent`] — Agent trait plus human, scripted and random agents
//! - [`ui`] — Terminal UI for hot-seat play
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
