//! UseCase 層
//!
//! UI 層からの要求を SessionRegistry の操作に変換します。

mod error;
mod get_board_summary;
mod join_board;
mod list_messages;
mod post_message;
mod rename_user;
mod resume_session;
mod set_preference;

pub use error::JoinBoardError;
pub use get_board_summary::GetBoardSummaryUseCase;
pub use join_board::JoinBoardUseCase;
pub use list_messages::ListMessagesUseCase;
pub use post_message::PostMessageUseCase;
pub use rename_user::RenameUserUseCase;
pub use resume_session::ResumeSessionUseCase;
pub use set_preference::SetPreferenceUseCase;
