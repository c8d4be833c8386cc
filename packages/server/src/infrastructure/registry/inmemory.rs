//! InMemory SessionRegistry 実装
//!
//! ドメイン層が定義する SessionRegistry trait の具体的な実装。
//! ユーザーの HashMap とメッセージログを 1 つの `RwLock` で保護します。
//!
//! ## ロックの規律
//!
//! - 参照系（lookup, list, summary）は読み取りロック
//! - 更新系（create, rename, preference, post）と監視タスクの削除処理は書き込みロック
//! - ロックを保持したまま `.await` でブロックする処理は行わない
//!   （生存通知は `try_send` で送る）

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use chatboard_shared::time::Clock;
use tokio::sync::{
    RwLock,
    mpsc::{self, error::TrySendError},
};

use crate::domain::{
    BoardSummary, Message, RandomSource, RegistryError, SessionRegistry, SessionToken,
    TOKEN_BYTES, Timestamp, User,
};

use super::watcher::InactivityWatcher;

/// Inactivity window after which a user is evicted
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Stored record: the user plus the sending side of its liveness channel
struct UserEntry {
    user: User,
    liveness: mpsc::Sender<()>,
}

/// Shared mutable state guarded by the registry lock
#[derive(Default)]
pub(super) struct BoardState {
    users: HashMap<SessionToken, UserEntry>,
    /// Oldest first (append order)
    messages: Vec<Message>,
}

impl BoardState {
    /// Timestamps never decrease in log order, even if the wall clock does.
    fn next_timestamp(&self, now_millis: i64) -> Timestamp {
        let now = Timestamp::new(now_millis);
        match self.messages.last() {
            Some(last) => now.max(last.timestamp),
            None => now,
        }
    }

    fn append(&mut self, author: String, text: String, now_millis: i64) {
        let timestamp = self.next_timestamp(now_millis);
        self.messages.push(Message::new(author, text, timestamp));
    }

    fn announce(&mut self, text: String, now_millis: i64) {
        let timestamp = self.next_timestamp(now_millis);
        self.messages.push(Message::system(text, timestamp));
    }

    /// Announce the departure and drop the record. `None` if already gone.
    pub(super) fn evict(&mut self, token: &SessionToken, now_millis: i64) -> Option<User> {
        let entry = self.users.remove(token)?;
        self.announce(format!("User '{}' has left", entry.user.name), now_millis);
        Some(entry.user)
    }
}

/// インメモリ SessionRegistry 実装
pub struct InMemorySessionRegistry {
    state: Arc<RwLock<BoardState>>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    inactivity_timeout: Duration,
}

impl InMemorySessionRegistry {
    /// 新しい InMemorySessionRegistry を作成
    pub fn new(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            random,
            clock,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT,
        }
    }

    /// 非アクティブ判定までの時間を変更する
    pub fn with_inactivity_timeout(mut self, inactivity_timeout: Duration) -> Self {
        self.inactivity_timeout = inactivity_timeout;
        self
    }

    pub fn inactivity_timeout(&self) -> Duration {
        self.inactivity_timeout
    }

    fn issue_token(&self) -> Result<SessionToken, RegistryError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.random.fill_bytes(&mut bytes)?;
        Ok(SessionToken::from_bytes(&bytes))
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn create_user(&self) -> Result<User, RegistryError> {
        let token = self.issue_token().inspect_err(|e| {
            tracing::error!("Refusing to create user: {}", e);
        })?;
        let user = User::new(token.clone(), User::guest_name(self.random.guest_suffix()));
        let (liveness_tx, liveness_rx) = mpsc::channel(1);

        {
            let mut state = self.state.write().await;
            state.users.insert(
                token.clone(),
                UserEntry {
                    user: user.clone(),
                    liveness: liveness_tx,
                },
            );
            let now = self.clock.now_millis();
            state.announce(format!("User '{}' has joined", user.name), now);
        }

        InactivityWatcher::new(
            token,
            liveness_rx,
            self.state.clone(),
            self.clock.clone(),
            self.inactivity_timeout,
        )
        .spawn();

        tracing::info!("User '{}' joined the board", user.name);
        Ok(user)
    }

    async fn lookup_user(&self, token: &SessionToken) -> Option<User> {
        let state = self.state.read().await;
        let entry = state.users.get(token)?;

        // A full channel already carries a pending ping.
        match entry.liveness.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => {}
            Err(TrySendError::Closed(())) => {
                tracing::debug!("Watcher of '{}' has already finished", entry.user.name);
            }
        }

        Some(entry.user.clone())
    }

    async fn rename_user(&self, token: &SessionToken, new_name: String) {
        let mut state = self.state.write().await;
        let Some(old_name) = state.users.get(token).map(|e| e.user.name.clone()) else {
            tracing::debug!("Ignoring rename for an unknown session");
            return;
        };

        let now = self.clock.now_millis();
        state.announce(
            format!("User '{}' is now known as '{}'", old_name, new_name),
            now,
        );
        if let Some(entry) = state.users.get_mut(token) {
            entry.user.name = new_name;
        }
    }

    async fn set_preference(&self, token: &SessionToken, style: String) {
        let mut state = self.state.write().await;
        match state.users.get_mut(token) {
            Some(entry) => entry.user.preferred_style = style,
            None => tracing::debug!("Ignoring style change for an unknown session"),
        }
    }

    async fn post_message(&self, token: &SessionToken, text: String) {
        let mut state = self.state.write().await;
        let Some(author) = state.users.get(token).map(|e| e.user.name.clone()) else {
            tracing::debug!("Ignoring message from an unknown session");
            return;
        };

        let now = self.clock.now_millis();
        state.append(author, text, now);
    }

    async fn list_messages(&self) -> Vec<Message> {
        let state = self.state.read().await;
        state.messages.iter().rev().cloned().collect()
    }

    async fn summary(&self) -> BoardSummary {
        let state = self.state.read().await;
        BoardSummary {
            active_users: state.users.len(),
            message_count: state.messages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;
    use crate::{
        domain::{RandomSourceError, random::MockRandomSource},
        infrastructure::testing::{SequenceRandomSource, TEST_TIME, create_test_registry},
    };

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemorySessionRegistry の作成・取得・更新・一覧操作
    // - 未知のトークンに対する操作が何も変更しないこと
    // - メッセージログの順序（保存は古い順、一覧は新しい順）
    //
    // 【なぜこのテストが必要か】
    // - Registry は全リクエストが共有する唯一の状態
    // - 期限切れとリクエストの競合を no-op で吸収する前提を保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. 作成したユーザーを取得できる
    // 2. 参加・改名・投稿が正しい順序で記録される
    // 3. 未知のトークンでの更新は無視される
    // 4. 乱数源の失敗時にユーザーが作成されない
    // ========================================

    /// Clock that steps backwards by one second on every call
    struct SteppingBackClock(AtomicI64);

    impl Clock for SteppingBackClock {
        fn now_millis(&self) -> i64 {
            self.0.fetch_sub(1000, Ordering::SeqCst)
        }
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_lookup_round_trip() {
        // テスト項目: 作成したユーザーをトークンで取得できる
        // given (前提条件):
        let registry = create_test_registry(7);

        // when (操作):
        let created = registry.create_user().await.unwrap();
        let found = registry.lookup_user(&created.token).await;

        // then (期待する結果):
        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.name, "Guest_7");
        assert_eq!(created.preferred_style, "brutal");
        assert_eq!(created.token.as_str().len(), 40);
    }

    #[tokio::test]
    async fn test_create_user_appends_join_message() {
        // テスト項目: ユーザー作成時に参加メッセージが追加される
        // given (前提条件):
        let registry = create_test_registry(42);

        // when (操作):
        registry.create_user().await.unwrap();

        // then (期待する結果):
        let messages = registry.list_messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].author, "Server");
        // 参加通知は改名・退出と同じ "User '<name>' ..." の形式
        assert_eq!(messages[0].text, "User 'Guest_42' has joined");
        assert_eq!(messages[0].timestamp, Timestamp::new(TEST_TIME));
        assert_eq!(
            registry.summary().await,
            BoardSummary {
                active_users: 1,
                message_count: 1
            }
        );
    }

    #[tokio::test]
    async fn test_created_tokens_are_unique() {
        // テスト項目: 作成したユーザーごとに異なるトークンが発行される
        // given (前提条件):
        let registry = create_test_registry(0);

        // when (操作):
        let mut tokens = Vec::new();
        for _ in 0..5 {
            tokens.push(registry.create_user().await.unwrap().token);
        }

        // then (期待する結果):
        let mut unique = tokens.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert_eq!(registry.summary().await.active_users, 5);
    }

    #[tokio::test]
    async fn test_lookup_unknown_or_empty_token_returns_none() {
        // テスト項目: 空または未発行のトークンでは None が返される
        // given (前提条件):
        let registry = create_test_registry(0);
        registry.create_user().await.unwrap();

        // when (操作):
        let empty = registry.lookup_user(&SessionToken::new("")).await;
        let unknown = registry
            .lookup_user(&SessionToken::new("ab".repeat(TOKEN_BYTES)))
            .await;

        // then (期待する結果):
        assert!(empty.is_none());
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_post_rename_post_scenario() {
        // テスト項目: 参加・投稿・改名・投稿が正しい順序と送信者で記録される
        // given (前提条件):
        let registry = create_test_registry(7);
        let user = registry.create_user().await.unwrap();

        // when (操作):
        registry.post_message(&user.token, "hi".to_string()).await;
        let after_first_post = registry.list_messages().await;
        registry.rename_user(&user.token, "Bob".to_string()).await;
        registry.post_message(&user.token, "yo".to_string()).await;

        // then (期待する結果):
        assert_eq!(texts(&after_first_post), vec!["hi", "User 'Guest_7' has joined"]);

        let messages = registry.list_messages().await;
        assert_eq!(
            texts(&messages),
            vec![
                "yo",
                "User 'Guest_7' is now known as 'Bob'",
                "hi",
                "User 'Guest_7' has joined",
            ]
        );
        // 投稿時点の名前が記録され、改名しても過去のメッセージは変わらない
        assert_eq!(messages[0].author, "Bob");
        assert_eq!(messages[2].author, "Guest_7");
        assert_eq!(registry.lookup_user(&user.token).await.unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn test_set_preference_stores_value_verbatim() {
        // テスト項目: スタイルは検証されずにそのまま保存される
        // given (前提条件):
        let registry = create_test_registry(0);
        let user = registry.create_user().await.unwrap();

        // when (操作):
        registry.set_preference(&user.token, "milky".to_string()).await;
        let milky = registry.lookup_user(&user.token).await.unwrap();
        registry
            .set_preference(&user.token, "neon &amp; dark".to_string())
            .await;
        let custom = registry.lookup_user(&user.token).await.unwrap();

        // then (期待する結果):
        assert_eq!(milky.preferred_style, "milky");
        assert_eq!(custom.preferred_style, "neon &amp; dark");
        // スタイル変更はメッセージを追加しない
        assert_eq!(registry.summary().await.message_count, 1);
    }

    #[tokio::test]
    async fn test_operations_with_unknown_token_are_no_ops() {
        // テスト項目: 未発行のトークンでの更新操作は状態を変更しない（冪等性）
        // given (前提条件):
        let registry = create_test_registry(0);
        let user = registry.create_user().await.unwrap();
        let before_messages = registry.list_messages().await;
        let before_summary = registry.summary().await;

        // when (操作):
        for token in [SessionToken::new(""), SessionToken::new("0f".repeat(TOKEN_BYTES))] {
            registry.rename_user(&token, "Mallory".to_string()).await;
            registry.set_preference(&token, "milky".to_string()).await;
            registry.post_message(&token, "spam".to_string()).await;
        }

        // then (期待する結果):
        assert_eq!(registry.list_messages().await, before_messages);
        assert_eq!(registry.summary().await, before_summary);
        assert_eq!(registry.lookup_user(&user.token).await, Some(user));
    }

    #[tokio::test]
    async fn test_list_messages_returns_independent_snapshot() {
        // テスト項目: 一覧結果を変更してもレジストリ内部に影響しない
        // given (前提条件):
        let registry = create_test_registry(0);
        let user = registry.create_user().await.unwrap();
        registry.post_message(&user.token, "first".to_string()).await;

        // when (操作):
        let mut snapshot = registry.list_messages().await;
        snapshot.clear();
        registry.post_message(&user.token, "second".to_string()).await;

        // then (期待する結果):
        assert!(snapshot.is_empty());
        let messages = registry.list_messages().await;
        assert_eq!(texts(&messages), vec!["second", "first", "User 'Guest_0' has joined"]);
    }

    #[tokio::test]
    async fn test_timestamps_never_decrease_in_log_order() {
        // テスト項目: 時計が巻き戻ってもログ順のタイムスタンプは減少しない
        // given (前提条件):
        let registry = InMemorySessionRegistry::new(
            Arc::new(SequenceRandomSource::default()),
            Arc::new(SteppingBackClock(AtomicI64::new(TEST_TIME))),
        );
        let user = registry.create_user().await.unwrap();

        // when (操作):
        for text in ["a", "b", "c"] {
            registry.post_message(&user.token, text.to_string()).await;
        }

        // then (期待する結果):
        let messages = registry.list_messages().await;
        assert_eq!(messages.len(), 4);
        assert!(
            messages
                .windows(2)
                .all(|pair| pair[0].timestamp >= pair[1].timestamp)
        );
    }

    #[tokio::test]
    async fn test_create_user_fails_when_random_source_fails() {
        // テスト項目: 乱数源が失敗した場合、ユーザーは作成されずエラーが返される
        // given (前提条件):
        let mut random = MockRandomSource::new();
        random
            .expect_fill_bytes()
            .returning(|_| Err(RandomSourceError("entropy pool closed".to_string())));
        random.expect_guest_suffix().never();
        let registry = InMemorySessionRegistry::new(
            Arc::new(random),
            Arc::new(chatboard_shared::time::FixedClock::new(TEST_TIME)),
        );

        // when (操作):
        let result = registry.create_user().await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegistryError::EntropyUnavailable(RandomSourceError(
                "entropy pool closed".to_string()
            )))
        );
        assert_eq!(registry.summary().await, BoardSummary::default());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_posts_are_all_recorded() {
        // テスト項目: 並行した投稿がすべて欠けることなく記録される
        // given (前提条件):
        let registry = create_test_registry(0);
        let user = registry.create_user().await.unwrap();

        // when (操作):
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..20 {
            let registry = registry.clone();
            let token = user.token.clone();
            tasks.spawn(async move {
                registry.post_message(&token, format!("message {}", i)).await;
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        // then (期待する結果):
        let messages = registry.list_messages().await;
        assert_eq!(messages.len(), 21);
        for i in 0..20 {
            let text = format!("message {}", i);
            assert_eq!(messages.iter().filter(|m| m.text == text).count(), 1);
        }
        assert_eq!(messages.last().unwrap().text, "User 'Guest_0' has joined");
    }
}
