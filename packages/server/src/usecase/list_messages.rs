//! UseCase: メッセージ一覧の取得

use std::sync::Arc;

use crate::domain::{Message, SessionRegistry};

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 新しい順のメッセージ一覧（スナップショット）を返す
    pub async fn execute(&self) -> Vec<Message> {
        self.registry.list_messages().await
    }
}
