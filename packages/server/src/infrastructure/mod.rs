//! Infrastructure 層
//!
//! ドメイン層が定義するインターフェースの具体的な実装を提供します。

pub mod dto;
pub mod random;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use random::OsRandomSource;
pub use registry::{DEFAULT_INACTIVITY_TIMEOUT, InMemorySessionRegistry};
