//! セッションレジストリの実装
//!
//! - `inmemory`: ユーザーとメッセージログを 1 つの RwLock で守るインメモリ実装
//! - `watcher`: ユーザーごとの非アクティブ監視タスク

mod inmemory;
mod watcher;

pub use inmemory::{DEFAULT_INACTIVITY_TIMEOUT, InMemorySessionRegistry};
