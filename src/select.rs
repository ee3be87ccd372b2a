//! Picks the day's records from the keyword pool.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::keyword::KeywordRecord;

/// Returns `min(max_count, pool.len())` distinct records from `pool`. The
/// generator is seeded from `seed_date` right before sampling, so every call
/// on the same date with the same pool picks the same records. The order of
/// the result is unspecified.
pub fn select(
    pool: &[KeywordRecord],
    max_count: usize,
    seed_date: NaiveDate,
) -> Vec<KeywordRecord> {
    let mut rng = ChaCha20Rng::seed_from_u64(day_seed(seed_date));
    pool.choose_multiple(&mut rng, max_count).cloned().collect()
}

/// The seed for a date: its day number counting 0001-01-01 as day 1.
pub fn day_seed(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}
