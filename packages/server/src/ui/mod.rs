//! Chat board HTTP interface.
//!
//! Translates HTTP verbs and paths into use case calls and renders the
//! results as htmx fragments, static assets or JSON.

mod form;
mod handler;
mod server;
mod session;
mod signal;
pub mod state;
pub mod view;

pub use server::{Server, ServerError};
pub use session::SESSION_COOKIE;
