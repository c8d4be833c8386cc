//! ドメイン層のエラー型
//!
//! 未知のセッショントークンはエラーではありません（`None` または no-op として扱う）。

use thiserror::Error;

/// The secure random source could not produce bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("random source failure: {0}")]
pub struct RandomSourceError(pub String);

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No identity can be issued safely without secure randomness
    #[error("cannot issue a session token: {0}")]
    EntropyUnavailable(#[from] RandomSourceError),
}
