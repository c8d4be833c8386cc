//! UseCase: ボードの集計情報の取得

use std::sync::Arc;

use crate::domain::{BoardSummary, SessionRegistry};

/// 集計情報取得のユースケース
pub struct GetBoardSummaryUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl GetBoardSummaryUseCase {
    /// 新しい GetBoardSummaryUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> BoardSummary {
        self.registry.summary().await
    }
}
