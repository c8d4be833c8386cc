//! Server state shared by all handlers.

use std::sync::Arc;

use crate::usecase::{
    GetBoardSummaryUseCase, JoinBoardUseCase, ListMessagesUseCase, PostMessageUseCase,
    RenameUserUseCase, ResumeSessionUseCase, SetPreferenceUseCase,
};

use super::view::Favicons;

/// Shared application state
pub struct AppState {
    /// JoinBoardUseCase（新規セッション開始のユースケース）
    pub join_board_usecase: Arc<JoinBoardUseCase>,
    /// ResumeSessionUseCase（セッション再開のユースケース）
    pub resume_session_usecase: Arc<ResumeSessionUseCase>,
    /// RenameUserUseCase（ユーザー名変更のユースケース）
    pub rename_user_usecase: Arc<RenameUserUseCase>,
    /// SetPreferenceUseCase（表示スタイル変更のユースケース）
    pub set_preference_usecase: Arc<SetPreferenceUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧取得のユースケース）
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
    /// GetBoardSummaryUseCase（集計情報取得のユースケース）
    pub get_board_summary_usecase: Arc<GetBoardSummaryUseCase>,
    /// Favicons rendered at startup
    pub favicons: Favicons,
    /// `src` of the htmx script tag on the page
    pub htmx_src: String,
}
