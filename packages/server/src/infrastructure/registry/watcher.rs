//! ユーザーごとの非アクティブ監視タスク
//!
//! 状態は 2 つだけ:
//!
//! - Waiting: 生存通知かタイムアウトを待つ。通知が届けば待ち直す
//! - Evicting: 書き込みロックを取り、ユーザーが残っていれば退出メッセージを追加して削除する。終端状態
//!
//! 監視タスクはユーザーのレコード本体を持たず、トークンと受信側チャンネルだけを持ちます。
//! 削除時には必ずレジストリから最新の状態を取り直します。

use std::{sync::Arc, time::Duration};

use chatboard_shared::time::Clock;
use tokio::{
    sync::{RwLock, mpsc},
    task::JoinHandle,
    time,
};

use crate::domain::SessionToken;

use super::inmemory::BoardState;

pub(super) struct InactivityWatcher {
    token: SessionToken,
    liveness: mpsc::Receiver<()>,
    state: Arc<RwLock<BoardState>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl InactivityWatcher {
    pub(super) fn new(
        token: SessionToken,
        liveness: mpsc::Receiver<()>,
        state: Arc<RwLock<BoardState>>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            token,
            liveness,
            state,
            clock,
            timeout,
        }
    }

    pub(super) fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(mut self) {
        // Waiting: each ping restarts the window. A closed channel means the
        // record is already gone, which eviction tolerates.
        while let Ok(Some(())) = time::timeout(self.timeout, self.liveness.recv()).await {}

        // Evicting
        let mut state = self.state.write().await;
        let now = self.clock.now_millis();
        match state.evict(&self.token, now) {
            Some(user) => tracing::info!(
                "User '{}' left after {:?} of inactivity",
                user.name,
                self.timeout
            ),
            None => tracing::debug!("Inactive session was already removed"),
        }
    }
}
