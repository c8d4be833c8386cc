//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    domain::SessionRegistry,
    usecase::{
        GetBoardSummaryUseCase, JoinBoardUseCase, ListMessagesUseCase, PostMessageUseCase,
        RenameUserUseCase, ResumeSessionUseCase, SetPreferenceUseCase,
    },
};

use super::{
    handler::{api, asset, board, fallback},
    signal::shutdown_signal,
    state::AppState,
    view::{DEFAULT_HTMX_SRC, Favicons},
};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to render favicons: {0}")]
    Favicon(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Chat board HTTP server
///
/// # Example
///
/// ```ignore
/// let server = Server::from_registry(registry);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// JoinBoardUseCase（新規セッション開始のユースケース）
    join_board_usecase: Arc<JoinBoardUseCase>,
    /// ResumeSessionUseCase（セッション再開のユースケース）
    resume_session_usecase: Arc<ResumeSessionUseCase>,
    /// RenameUserUseCase（ユーザー名変更のユースケース）
    rename_user_usecase: Arc<RenameUserUseCase>,
    /// SetPreferenceUseCase（表示スタイル変更のユースケース）
    set_preference_usecase: Arc<SetPreferenceUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧取得のユースケース）
    list_messages_usecase: Arc<ListMessagesUseCase>,
    /// GetBoardSummaryUseCase（集計情報取得のユースケース）
    get_board_summary_usecase: Arc<GetBoardSummaryUseCase>,
    /// `src` of the htmx script tag
    htmx_src: String,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        join_board_usecase: Arc<JoinBoardUseCase>,
        resume_session_usecase: Arc<ResumeSessionUseCase>,
        rename_user_usecase: Arc<RenameUserUseCase>,
        set_preference_usecase: Arc<SetPreferenceUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        list_messages_usecase: Arc<ListMessagesUseCase>,
        get_board_summary_usecase: Arc<GetBoardSummaryUseCase>,
    ) -> Self {
        Self {
            join_board_usecase,
            resume_session_usecase,
            rename_user_usecase,
            set_preference_usecase,
            post_message_usecase,
            list_messages_usecase,
            get_board_summary_usecase,
            htmx_src: DEFAULT_HTMX_SRC.to_string(),
        }
    }

    /// Create a Server whose use cases all share `registry`
    pub fn from_registry(registry: Arc<dyn SessionRegistry>) -> Self {
        Self::new(
            Arc::new(JoinBoardUseCase::new(registry.clone())),
            Arc::new(ResumeSessionUseCase::new(registry.clone())),
            Arc::new(RenameUserUseCase::new(registry.clone())),
            Arc::new(SetPreferenceUseCase::new(registry.clone())),
            Arc::new(PostMessageUseCase::new(registry.clone())),
            Arc::new(ListMessagesUseCase::new(registry.clone())),
            Arc::new(GetBoardSummaryUseCase::new(registry)),
        )
    }

    /// Load htmx from `src` instead of the CDN, e.g. a self-hosted copy
    pub fn with_htmx_src(mut self, src: impl Into<String>) -> Self {
        self.htmx_src = src.into();
        self
    }

    /// Build the router with all routes and shared state
    ///
    /// # Errors
    ///
    /// Returns an error if the favicons cannot be rendered.
    pub fn into_router(self) -> Result<Router, ServerError> {
        let app_state = Arc::new(AppState {
            join_board_usecase: self.join_board_usecase,
            resume_session_usecase: self.resume_session_usecase,
            rename_user_usecase: self.rename_user_usecase,
            set_preference_usecase: self.set_preference_usecase,
            post_message_usecase: self.post_message_usecase,
            list_messages_usecase: self.list_messages_usecase,
            get_board_summary_usecase: self.get_board_summary_usecase,
            favicons: Favicons::render()?,
            htmx_src: self.htmx_src,
        });

        let app = Router::new()
            // ページと htmx フラグメント
            .route("/", get(board::index))
            .route("/messages", get(board::get_messages).post(board::post_message))
            .route("/name", get(board::get_name).put(board::put_name))
            .route("/name/edit", get(board::edit_name))
            .route("/style", put(board::put_style))
            // 静的アセット
            .route("/style_brutal.css", get(asset::stylesheet_brutal))
            .route("/style_milky.css", get(asset::stylesheet_milky))
            .route("/favicon_brutal.ico", get(asset::favicon_brutal))
            .route("/favicon_milky.ico", get(asset::favicon_milky))
            // JSON API
            .route("/api/health", get(api::health_check))
            .route("/api/messages", get(api::get_messages))
            .route("/api/board", get(api::get_board_summary))
            .fallback(fallback)
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Ok(app)
    }

    /// Run the chat board server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), ServerError> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let app = self.into_router()?;

        tracing::info!("Chat board listening on http://{}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
