//! 乱数源インターフェース
//!
//! セッショントークンとゲスト名の生成に使う乱数源を抽象化します。
//! テストでは決定的な実装を注入できます。

use super::error::RandomSourceError;

/// Secure randomness used to issue identities
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with cryptographically secure random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError>;

    /// Suffix for a default guest name, in `0..1000`
    fn guest_suffix(&self) -> u16;
}
