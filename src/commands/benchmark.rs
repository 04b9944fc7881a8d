//! Benchmark command
//!
//! Times the matcher across many random racks drawn from a standard tile bag.

use crate::core::{ConstraintError, TilePool, parse_constraints};
use crate::matcher::{LengthPolicy, Matcher};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Letter counts of the standard 100-tile English bag, blanks excluded
pub const TILE_DISTRIBUTION: [(char, usize); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Standard rack size
pub const RACK_SIZE: usize = 7;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub racks: usize,
    pub rack_size: usize,
    pub constraints: Option<String>,
    pub max_length: Option<usize>,
    pub policy: LengthPolicy,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(racks: usize) -> Self {
        Self {
            racks,
            rack_size: RACK_SIZE,
            constraints: None,
            max_length: None,
            policy: LengthPolicy::TileBudget,
            seed: None,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub words_per_rack: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    pub empty_racks: usize,
    /// Longest playable word length → number of racks
    pub longest_distribution: HashMap<usize, usize>,
    pub best_rack: Option<(String, usize)>,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Outcome for a single rack
struct RackOutcome {
    rack: String,
    matches: usize,
    longest: usize,
}

/// All tiles of the bag as individual letters
#[must_use]
pub fn tile_bag() -> Vec<char> {
    TILE_DISTRIBUTION
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count))
        .collect()
}

/// Draw `count` racks of up to `rack_size` tiles, each from a full bag
pub fn draw_racks<R: Rng + ?Sized>(rng: &mut R, count: usize, rack_size: usize) -> Vec<String> {
    let mut bag = tile_bag();

    (0..count)
        .map(|_| {
            bag.shuffle(rng);
            bag.iter().take(rack_size).collect()
        })
        .collect()
}

/// Run the matcher on random racks against `words`
///
/// Racks are searched in parallel; each search is independent.
///
/// # Errors
///
/// Returns `ConstraintError` if the configured constraint string is malformed.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    words: &[String],
) -> Result<BenchmarkResult, ConstraintError> {
    let constraints = parse_constraints(config.constraints.as_deref())?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let racks = draw_racks(&mut rng, config.racks, config.rack_size);

    info!(
        "Benchmarking {} racks of {} tiles against {} words",
        racks.len(),
        config.rack_size,
        words.len()
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(racks.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<RackOutcome> = racks
        .into_par_iter()
        .map(|rack| {
            let matcher = Matcher::new(TilePool::parse(&rack), constraints.clone())
                .with_policy(config.policy)
                .with_max_length(config.max_length);
            let matches = matcher.filter(words);
            let longest = matches
                .iter()
                .map(|w| w.chars().count())
                .max()
                .unwrap_or(0);
            pb.inc(1);

            RackOutcome {
                rack,
                matches: matches.len(),
                longest,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_racks = outcomes.len();
    let total_matches: usize = outcomes.iter().map(|o| o.matches).sum();
    let mut longest_distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &outcomes {
        *longest_distribution.entry(outcome.longest).or_insert(0) += 1;
    }

    let best_rack = outcomes
        .iter()
        .max_by_key(|o| o.matches)
        .map(|o| (o.rack.clone(), o.matches));

    Ok(BenchmarkResult {
        total_racks,
        words_per_rack: words.len(),
        total_matches,
        average_matches: if total_racks > 0 {
            total_matches as f64 / total_racks as f64
        } else {
            0.0
        },
        min_matches: outcomes.iter().map(|o| o.matches).min().unwrap_or(0),
        max_matches: outcomes.iter().map(|o| o.matches).max().unwrap_or(0),
        empty_racks: outcomes.iter().filter(|o| o.matches == 0).count(),
        longest_distribution,
        best_rack,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn bag_has_98_letter_tiles() {
        let bag = tile_bag();
        assert_eq!(bag.len(), 98);
        assert_eq!(bag.iter().filter(|&&c| c == 'E').count(), 12);
    }

    #[test]
    fn racks_have_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let racks = draw_racks(&mut rng, 20, RACK_SIZE);

        assert_eq!(racks.len(), 20);
        assert!(racks.iter().all(|r| r.chars().count() == RACK_SIZE));
    }

    #[test]
    fn racks_never_exceed_bag_supply() {
        let mut rng = StdRng::seed_from_u64(11);
        for rack in draw_racks(&mut rng, 50, 20) {
            let zs = rack.chars().filter(|&c| c == 'Z').count();
            assert!(zs <= 1, "rack {rack} has {zs} Zs");
        }
    }

    #[test]
    fn seeded_runs_draw_identical_racks() {
        let a = draw_racks(&mut StdRng::seed_from_u64(42), 5, RACK_SIZE);
        let b = draw_racks(&mut StdRng::seed_from_u64(42), 5, RACK_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig {
            seed: Some(1),
            ..BenchmarkConfig::new(25)
        };
        let result = run_benchmark(&config, &words).unwrap();

        assert_eq!(result.total_racks, 25);
        assert_eq!(result.words_per_rack, words.len());
        assert!(result.min_matches <= result.max_matches);
        assert!(result.average_matches >= result.min_matches as f64);
        assert!(result.average_matches <= result.max_matches as f64);

        let distribution_sum: usize = result.longest_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_racks);
        assert!(result.longest_distribution.keys().all(|&len| len <= RACK_SIZE));
    }

    #[test]
    fn benchmark_is_deterministic_with_seed() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig {
            seed: Some(9),
            ..BenchmarkConfig::new(10)
        };
        let a = run_benchmark(&config, &words).unwrap();
        let b = run_benchmark(&config, &words).unwrap();

        assert_eq!(a.total_matches, b.total_matches);
        assert_eq!(a.best_rack, b.best_rack);
    }

    #[test]
    fn benchmark_applies_max_length() {
        let words = words_from_slice(WORDS);
        let config = BenchmarkConfig {
            max_length: Some(2),
            seed: Some(3),
            ..BenchmarkConfig::new(30)
        };
        let result = run_benchmark(&config, &words).unwrap();

        assert_eq!(result.total_racks, 30);
        assert!(result.longest_distribution.keys().all(|&len| len <= 2));
    }

    #[test]
    fn benchmark_no_racks() {
        let words = words_from_slice(WORDS);
        let result = run_benchmark(&BenchmarkConfig::new(0), &words).unwrap();

        assert_eq!(result.total_racks, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.best_rack.is_none());
    }

    #[test]
    fn benchmark_rejects_bad_constraints() {
        let config = BenchmarkConfig {
            constraints: Some("e,0".to_string()),
            ..BenchmarkConfig::new(1)
        };
        assert!(run_benchmark(&config, &[]).is_err());
    }
}
