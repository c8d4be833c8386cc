//! UseCase: メッセージ投稿

use std::sync::Arc;

use crate::domain::{SessionRegistry, SessionToken};

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// ユーザーの現在の名前でメッセージを投稿する
    pub async fn execute(&self, token: &SessionToken, text: String) {
        self.registry.post_message(token, text).await;
    }
}
