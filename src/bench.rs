//! Benchmarking support for the autocomplete index.
//!
//! Provides deterministic synthetic vocabularies so that benchmark runs are
//! comparable across machines and commits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::prefix_index::PrefixIndex;

/// Letters used by synthetic vocabularies, most frequent first.
const LETTERS: &[u8] = b"etaoinshrdlucmfwypvbgkjqxz";

/// Generates `count` pseudo-random lowercase words of 3 to 12 letters.
///
/// The same `seed` always yields the same vocabulary.
pub fn synthetic_vocabulary(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..=12);
            (0..len).map(|_| skewed_letter(&mut rng)).collect()
        })
        .collect()
}

/// Picks a letter, favouring the front of `LETTERS` so that prefixes are shared.
fn skewed_letter(rng: &mut StdRng) -> char {
    let r: f64 = rng.gen_range(0.0..1.0);
    let idx = (r * r * LETTERS.len() as f64) as usize;
    char::from(LETTERS[idx.min(LETTERS.len() - 1)])
}

/// Builds an index holding a synthetic vocabulary of `count` words.
pub fn synthetic_index(count: usize, seed: u64) -> PrefixIndex {
    let mut index = PrefixIndex::new();
    index.add(synthetic_vocabulary(count, seed));
    index
}
