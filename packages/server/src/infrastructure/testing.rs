//! Deterministic collaborators shared by unit tests.

use std::sync::{
    Arc,
    atomic::{AtomicU16, AtomicU8, Ordering},
};

use chatboard_shared::time::FixedClock;

use crate::domain::{RandomSource, RandomSourceError};

use super::InMemorySessionRegistry;

/// Counter-based random source: every call yields a new token and guest number
#[derive(Debug, Default)]
pub(crate) struct SequenceRandomSource {
    next_byte: AtomicU8,
    next_suffix: AtomicU16,
}

impl SequenceRandomSource {
    pub(crate) fn starting_at(suffix: u16) -> Self {
        Self {
            next_byte: AtomicU8::new(0),
            next_suffix: AtomicU16::new(suffix),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        let value = self.next_byte.fetch_add(1, Ordering::SeqCst);
        dest.fill(value);
        Ok(())
    }

    fn guest_suffix(&self) -> u16 {
        self.next_suffix.fetch_add(1, Ordering::SeqCst) % 1000
    }
}

pub(crate) const TEST_TIME: i64 = 1672531200000;

/// Registry with deterministic guest names starting at `Guest_<suffix>`
pub(crate) fn create_test_registry(suffix: u16) -> Arc<InMemorySessionRegistry> {
    Arc::new(InMemorySessionRegistry::new(
        Arc::new(SequenceRandomSource::starting_at(suffix)),
        Arc::new(FixedClock::new(TEST_TIME)),
    ))
}
