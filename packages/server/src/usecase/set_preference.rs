//! UseCase: 表示スタイルの変更

use std::sync::Arc;

use crate::domain::{SessionRegistry, SessionToken};

/// 表示スタイル変更のユースケース
pub struct SetPreferenceUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl SetPreferenceUseCase {
    /// 新しい SetPreferenceUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// スタイルを保存する（値は検証しない）
    pub async fn execute(&self, token: &SessionToken, style: String) {
        self.registry.set_preference(token, style).await;
    }
}
