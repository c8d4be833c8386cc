//! エンティティ
//!
//! レジストリが所有するユーザーとメッセージ。呼び出し側には常にコピーを返します。

use super::value_object::{SessionToken, Timestamp};

/// Author name used for join / rename / leave announcements
pub const SYSTEM_AUTHOR: &str = "Server";

/// Style assigned to every new user
pub const DEFAULT_STYLE: &str = "brutal";

/// A live user of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Session token (immutable)
    pub token: SessionToken,
    /// Display name, already sanitized by the caller
    pub name: String,
    /// Preferred style, stored verbatim
    pub preferred_style: String,
}

impl User {
    /// Create a user with the default style
    pub fn new(token: SessionToken, name: String) -> Self {
        Self {
            token,
            name,
            preferred_style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Default display name for a guest suffix in `0..1000`
    pub fn guest_name(suffix: u16) -> String {
        format!("Guest_{}", suffix)
    }
}

/// An entry of the shared feed
///
/// `author` is captured when the message is posted; renaming the user later
/// does not change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub author: String,
    pub timestamp: Timestamp,
    pub text: String,
}

impl Message {
    pub fn new(author: String, text: String, timestamp: Timestamp) -> Self {
        Self {
            author,
            timestamp,
            text,
        }
    }

    /// Announcement authored by the server
    pub fn system(text: String, timestamp: Timestamp) -> Self {
        Self::new(SYSTEM_AUTHOR.to_string(), text, timestamp)
    }

    pub fn is_system(&self) -> bool {
        self.author == SYSTEM_AUTHOR
    }
}

/// Point-in-time counters of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSummary {
    pub active_users: usize,
    pub message_count: usize,
}
