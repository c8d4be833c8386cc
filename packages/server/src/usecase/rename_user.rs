//! UseCase: ユーザー名の変更

use std::sync::Arc;

use crate::domain::{SessionRegistry, SessionToken};

/// ユーザー名変更のユースケース
pub struct RenameUserUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl RenameUserUseCase {
    /// 新しい RenameUserUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 名前を変更する
    ///
    /// # Arguments
    ///
    /// * `token` - 対象ユーザーのセッショントークン
    /// * `new_name` - 新しい名前（呼び出し側でエスケープ済み）
    pub async fn execute(&self, token: &SessionToken, new_name: String) {
        self.registry.rename_user(token, new_name).await;
    }
}
