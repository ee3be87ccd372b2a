//! Keeps the keyword pool large enough to select from. See
//! [`ensure_minimum`] for the entry point and [`expand`] for the
//! deterministic growth algorithm.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::catalog::{phrase, Theme, FILLERS, PHRASINGS, SUFFIXES, THEMES};
use crate::keyword::{Intent, KeywordRecord};
use crate::store::{KeywordStore, Result};

/// Knobs for [`ensure_minimum`].
#[derive(Clone, Debug)]
pub struct PoolOptions {
    /// The pool is grown when it holds fewer records than this.
    pub minimum_size: usize,

    /// Seeds the expansion generator. The same seed and the same starting
    /// pool always expand to the same result.
    pub expansion_seed: u64,

    /// Phrasing variants generated per (theme, subtopic) pair.
    pub phrasings_per_pair: usize,

    /// Suffix variants generated per (theme, subtopic) pair.
    pub suffixes_per_pair: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        PoolOptions {
            minimum_size: 120,
            expansion_seed: 20240901,
            phrasings_per_pair: 2,
            suffixes_per_pair: 1,
        }
    }
}

/// Makes sure the pool holds at least `options.minimum_size` records. A pool
/// that is already big enough is returned as-is and the store isn't touched.
/// Otherwise the pool is grown with [`expand`] and the whole result is
/// written back to `store`.
pub fn ensure_minimum(
    store: &KeywordStore,
    pool: Vec<KeywordRecord>,
    options: &PoolOptions,
) -> Result<Vec<KeywordRecord>> {
    if pool.len() >= options.minimum_size {
        debug!(
            size = pool.len(),
            minimum = options.minimum_size,
            "keyword pool already large enough"
        );
        return Ok(pool);
    }

    let before = pool.len();
    let pool = expand(pool, options);
    if pool.len() < options.minimum_size {
        warn!(
            size = pool.len(),
            minimum = options.minimum_size,
            "keyword catalog exhausted before reaching the minimum"
        );
    }
    info!(
        before,
        after = pool.len(),
        path = %store.path().display(),
        "expanded keyword pool"
    );
    store.save(&pool)?;
    Ok(pool)
}

/// Grows `pool` from the catalog until it holds `options.minimum_size`
/// records or the catalog runs out. Existing records keep their order at the
/// front; duplicates among them collapse to the first occurrence. No record
/// is ever added twice.
///
/// For every (theme, subtopic) pair the candidates are, in order: the theme
/// itself, `phrasings_per_pair` phrasings and `suffixes_per_pair` suffixed
/// names, both picked with a generator seeded from `options.expansion_seed`.
/// Filler topics come last.
pub fn expand(pool: Vec<KeywordRecord>, options: &PoolOptions) -> Vec<KeywordRecord> {
    let mut expander = Expander::new(pool, options.minimum_size);
    let mut rng = ChaCha20Rng::seed_from_u64(options.expansion_seed);

    'catalog: for theme in THEMES {
        for subtopic in theme.subtopics {
            for keyword in candidates(theme, options, &mut rng) {
                if expander.is_full() {
                    break 'catalog;
                }
                expander.push(KeywordRecord::new(keyword, *subtopic, theme.intent));
            }
        }
    }

    let fillers = FILLERS.iter().flat_map(|topic| {
        [
            KeywordRecord::new(*topic, "", Intent::Informational),
            KeywordRecord::new(
                format!("{} printable", topic),
                "",
                Intent::Transactional,
            ),
        ]
    });
    for record in fillers {
        if expander.is_full() {
            break;
        }
        expander.push(record);
    }

    expander.pool
}

fn candidates(theme: &Theme, options: &PoolOptions, rng: &mut ChaCha20Rng) -> Vec<String> {
    let mut keywords = vec![theme.name.to_owned()];
    keywords.extend(
        PHRASINGS
            .choose_multiple(rng, options.phrasings_per_pair)
            .map(|template| phrase(template, theme.name)),
    );
    keywords.extend(
        SUFFIXES
            .choose_multiple(rng, options.suffixes_per_pair)
            .map(|suffix| format!("{} {}", theme.name, suffix)),
    );
    keywords
}

/// The pool under construction together with its uniqueness set.
struct Expander {
    pool: Vec<KeywordRecord>,
    seen: HashSet<KeywordRecord>,
    minimum: usize,
}

impl Expander {
    fn new(existing: Vec<KeywordRecord>, minimum: usize) -> Expander {
        let mut expander = Expander {
            pool: Vec::with_capacity(existing.len()),
            seen: HashSet::new(),
            minimum,
        };
        for record in existing {
            expander.push(record);
        }
        expander
    }

    fn is_full(&self) -> bool {
        self.pool.len() >= self.minimum
    }

    fn push(&mut self, record: KeywordRecord) {
        if !self.seen.contains(&record) {
            self.seen.insert(record.clone());
            self.pool.push(record);
        }
    }
}
