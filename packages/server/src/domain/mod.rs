//! ドメイン層
//!
//! ビジネスロジックの中核となる型とインターフェースを定義します。
//! Infrastructure 層・UI 層には依存しません。

pub mod entity;
pub mod error;
pub mod random;
pub mod registry;
pub mod value_object;

pub use entity::{BoardSummary, DEFAULT_STYLE, Message, SYSTEM_AUTHOR, User};
pub use error::{RandomSourceError, RegistryError};
pub use random::RandomSource;
pub use registry::SessionRegistry;
pub use value_object::{SessionToken, TOKEN_BYTES, Timestamp};
