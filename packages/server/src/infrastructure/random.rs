//! OS 乱数源を使った RandomSource 実装

use rand::{Rng, RngCore, rngs::OsRng};

use crate::domain::{RandomSource, RandomSourceError};

/// Random source backed by the operating system's CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomSourceError(e.to_string()))
    }

    fn guest_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(0..1000)
    }
}
