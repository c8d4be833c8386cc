//! UseCase: 新規セッションの開始
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinBoardUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：ゲスト名のユーザーが作成され、参加メッセージが追加される
//! - 異常系：乱数源の失敗はエラーとして返され、ユーザーは作成されない

use std::sync::Arc;

use crate::domain::{SessionRegistry, User};

use super::error::JoinBoardError;

/// 新規セッション開始のユースケース
pub struct JoinBoardUseCase {
    /// Registry（共有状態の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl JoinBoardUseCase {
    /// 新しい JoinBoardUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 新しいユーザーを作成する
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - 作成されたユーザー（セッショントークンを含む）
    /// * `Err(JoinBoardError)` - 安全なトークンを発行できなかった
    pub async fn execute(&self) -> Result<User, JoinBoardError> {
        Ok(self.registry.create_user().await?)
    }
}
