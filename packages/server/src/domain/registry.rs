//! SessionRegistry trait 定義
//!
//! ユーザーとメッセージログを所有する共有状態へのインターフェース。
//! UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
//!
//! ## 未知のトークン
//!
//! 期限切れ・未発行のトークンに対する更新系の操作は、エラーにせず何もしません。
//! リクエスト処理中にユーザーが期限切れになる競合を無害にするためです。

use async_trait::async_trait;

use super::{BoardSummary, Message, RegistryError, SessionToken, User};

#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// 新しいユーザーを作成し、参加メッセージを追加して監視タスクを開始する
    async fn create_user(&self) -> Result<User, RegistryError>;

    /// ユーザーを取得する（見つかった場合は生存通知を送る）
    async fn lookup_user(&self, token: &SessionToken) -> Option<User>;

    /// ユーザー名を変更する（変更前に通知メッセージを追加）
    async fn rename_user(&self, token: &SessionToken, new_name: String);

    /// 表示スタイルを上書きする
    async fn set_preference(&self, token: &SessionToken, style: String);

    /// ユーザーの現在の名前でメッセージを投稿する
    async fn post_message(&self, token: &SessionToken, text: String);

    /// メッセージログのスナップショットを新しい順で返す
    async fn list_messages(&self) -> Vec<Message>;

    /// 接続中のユーザー数とメッセージ数
    async fn summary(&self) -> BoardSummary;
}
