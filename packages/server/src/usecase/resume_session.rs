//! UseCase: 既存セッションの再開
//!
//! トークンからユーザーを解決します。解決できた場合はそのユーザーの生存通知になります。

use std::sync::Arc;

use crate::domain::{SessionRegistry, SessionToken, User};

/// セッション再開のユースケース
pub struct ResumeSessionUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl ResumeSessionUseCase {
    /// 新しい ResumeSessionUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// トークンに対応するユーザーを返す（期限切れ・未発行なら `None`）
    pub async fn execute(&self, token: &SessionToken) -> Option<User> {
        self.registry.lookup_user(token).await
    }
}
