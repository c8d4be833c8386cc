//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::RegistryError;

/// Errors that can occur while joining the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinBoardError {
    /// A session could not be issued safely
    #[error("session could not be issued: {0}")]
    SessionUnavailable(#[from] RegistryError),
}
