//! Data Transfer Objects (DTOs) for the chat board.
//!
//! - `http`: JSON API response DTOs

pub mod conversion;
pub mod http;
