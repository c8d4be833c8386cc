//! 値オブジェクト
//!
//! ドメインで使う識別子・時刻を型として表現します。

use std::fmt;

/// Number of random bytes behind a session token.
pub const TOKEN_BYTES: usize = 20;

/// Opaque per-session secret; also the registry's map key.
///
/// Values read back from a cookie are wrapped verbatim: an unknown or
/// malformed token simply does not resolve to a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token string received from a client
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a token from freshly generated random bytes (lowercase hex)
    pub fn from_bytes(bytes: &[u8; TOKEN_BYTES]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
