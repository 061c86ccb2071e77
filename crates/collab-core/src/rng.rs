//! Seeded randomness for the baseline graph generator.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Deterministic RNG handed to graph generators.
///
/// Wraps `StdRng` seeded from a caller-supplied `u64`. An optional substream
/// id selects an independent sequence derived from the same master seed, so
/// several baselines can share one configured seed without overlapping.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Seeds the handle directly from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds the handle from substream `substream` of `seed`.
    pub fn substream(seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(seed, substream))
    }

    /// Master seed when `substream` is `None`, the derived stream otherwise.
    pub fn for_stream(seed: u64, substream: Option<u64>) -> Self {
        match substream {
            Some(id) => Self::substream(seed, id),
            None => Self::from_seed(seed),
        }
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Hashes `(seed, substream)` with SipHash-1-3 under zero keys.
pub fn derive_substream_seed(seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(seed);
    hasher.write_u64(substream);
    hasher.finish()
}
