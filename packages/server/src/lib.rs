//! Ephemeral shared chat board.
//!
//! Anonymous visitors get a session-bound identity, may rename themselves,
//! post to a single shared feed, and are forgotten after a period of
//! inactivity.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
