//! Ephemeral shared chat board server.
//!
//! Visitors get a guest identity, post to a single shared feed and are
//! forgotten after a period of inactivity.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatboard-server
//! cargo run --bin chatboard-server -- --host 0.0.0.0 --port 3000 --inactivity-timeout-secs 30
//! ```

use std::{sync::Arc, time::Duration};

use chatboard_server::{
    infrastructure::{InMemorySessionRegistry, OsRandomSource},
    ui::{Server, view::DEFAULT_HTMX_SRC},
    usecase::{
        GetBoardSummaryUseCase, JoinBoardUseCase, ListMessagesUseCase, PostMessageUseCase,
        RenameUserUseCase, ResumeSessionUseCase, SetPreferenceUseCase,
    },
};
use chatboard_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatboard-server")]
#[command(about = "Ephemeral shared chat board", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Seconds without activity after which a user is forgotten
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    inactivity_timeout_secs: u64,

    /// URL the page loads htmx from (point it at a self-hosted copy to avoid the CDN)
    #[arg(long, default_value = DEFAULT_HTMX_SRC)]
    htmx_src: String,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(&[env!("CARGO_PKG_NAME"), "tower_http"], &args.log_level);

    // Initialize dependencies in order:
    // 1. Registry
    // 2. UseCases
    // 3. Server

    // 1. Create Registry (in-memory shared state)
    let registry = Arc::new(
        InMemorySessionRegistry::new(Arc::new(OsRandomSource), Arc::new(SystemClock))
            .with_inactivity_timeout(Duration::from_secs(args.inactivity_timeout_secs)),
    );
    tracing::info!(
        "Registry created (inactivity timeout: {:?})",
        registry.inactivity_timeout()
    );

    // 2. Create UseCases
    let join_board_usecase = Arc::new(JoinBoardUseCase::new(registry.clone()));
    let resume_session_usecase = Arc::new(ResumeSessionUseCase::new(registry.clone()));
    let rename_user_usecase = Arc::new(RenameUserUseCase::new(registry.clone()));
    let set_preference_usecase = Arc::new(SetPreferenceUseCase::new(registry.clone()));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(registry.clone()));
    let list_messages_usecase = Arc::new(ListMessagesUseCase::new(registry.clone()));
    let get_board_summary_usecase = Arc::new(GetBoardSummaryUseCase::new(registry));

    // 3. Create and run the server
    let server = Server::new(
        join_board_usecase,
        resume_session_usecase,
        rename_user_usecase,
        set_preference_usecase,
        post_message_usecase,
        list_messages_usecase,
        get_board_summary_usecase,
    )
    .with_htmx_src(args.htmx_src);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
