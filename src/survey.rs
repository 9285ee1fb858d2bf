//! Monte Carlo survey of the strategy functions.
//!
//! Deals many random spots (random hand, position and table size, full board)
//! and asks for advice on every street. Frequencies are averaged per street and
//! position, and every distribution is checked on the way:
//! - it sums to one with no negative entries
//! - hole cards and board share no card
//!
//! Deals are split into fixed-size chunks, each with its own RNG seeded from
//! the base seed and the chunk number, so the result does not depend on the
//! thread count.

use indicatif::ProgressBar;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::cards::{deal_cards, Hand, Street};
use crate::error::Result;
use crate::strategy::{recommend, Action, Position};
use crate::trainer::{MAX_PLAYERS, MIN_PLAYERS};

/// Deals handled by one RNG.
pub const CHUNK_SIZE: usize = 1024;

/// Survey settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub deals: usize,
    pub seed: u64,
    /// Worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            deals: 100_000,
            seed: 0,
            threads: None,
        }
    }
}

/// Running totals for one (street, position) cell.
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    spots: u64,
    freq: [f64; 5],
    primary: [u64; 5],
}

impl Cell {
    fn merge(&mut self, other: &Cell) {
        self.spots += other.spots;
        for i in 0..5 {
            self.freq[i] += other.freq[i];
            self.primary[i] += other.primary[i];
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    cells: FxHashMap<(Street, Position), Cell>,
    violations: u64,
}

impl Tally {
    fn merge(mut self, other: Tally) -> Tally {
        for (key, cell) in other.cells {
            self.cells.entry(key).or_default().merge(&cell);
        }
        self.violations += other.violations;
        self
    }
}

/// Averages for one street and position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRow {
    pub street: Street,
    pub position: Position,
    pub spots: u64,
    /// Mean frequency of each action.
    pub mean_frequency: FxHashMap<Action, f64>,
    /// Share of spots where each action was primary.
    pub primary_share: FxHashMap<Action, f64>,
}

impl SurveyRow {
    pub fn mean(&self, action: Action) -> f64 {
        self.mean_frequency.get(&action).copied().unwrap_or(0.0)
    }

    pub fn primary(&self, action: Action) -> f64 {
        self.primary_share.get(&action).copied().unwrap_or(0.0)
    }
}

/// Survey output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    pub deals: usize,
    pub seed: u64,
    /// Distributions that failed a check. Zero on a healthy build.
    pub violations: u64,
    pub rows: Vec<SurveyRow>,
}

impl SurveyReport {
    fn from_tally(config: &SurveyConfig, tally: Tally) -> Self {
        let mut rows = Vec::new();
        for street in Street::ALL {
            for position in Position::ALL {
                let Some(cell) = tally.cells.get(&(street, position)) else {
                    continue;
                };
                let spots = cell.spots.max(1) as f64;
                let mut mean_frequency = FxHashMap::default();
                let mut primary_share = FxHashMap::default();
                for action in street_actions(street) {
                    mean_frequency.insert(action, cell.freq[action.index()] / spots);
                    primary_share.insert(action, cell.primary[action.index()] as f64 / spots);
                }
                rows.push(SurveyRow {
                    street,
                    position,
                    spots: cell.spots,
                    mean_frequency,
                    primary_share,
                });
            }
        }
        Self {
            deals: config.deals,
            seed: config.seed,
            violations: tally.violations,
            rows,
        }
    }

    pub fn row(&self, street: Street, position: Position) -> Option<&SurveyRow> {
        self.rows
            .iter()
            .find(|r| r.street == street && r.position == position)
    }

    /// Total spots surveyed on a street.
    pub fn spots(&self, street: Street) -> u64 {
        self.rows
            .iter()
            .filter(|r| r.street == street)
            .map(|r| r.spots)
            .sum()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n=== Strategy Survey ===");
        println!(
            "Deals: {} | Seed: {} | Violations: {}",
            self.deals, self.seed, self.violations
        );

        for street in Street::ALL {
            let actions = street_actions(street);
            println!("\n--- {} ({} spots) ---", street, self.spots(street));
            print!("{:<6}", "Pos");
            for action in actions {
                print!("{:>10}", action.title());
            }
            println!("{:>12}", "Primary");

            for row in self.rows.iter().filter(|r| r.street == street) {
                print!("{:<6}", row.position.name());
                for action in actions {
                    print!("{:>9.1}%", row.mean(action) * 100.0);
                }
                let top = actions
                    .iter()
                    .copied()
                    .max_by(|a, b| row.primary(*a).total_cmp(&row.primary(*b)))
                    .unwrap_or(Action::Fold);
                println!("{:>12}", format!("{} {:.0}%", top.name(), row.primary(top) * 100.0));
            }
        }
    }
}

fn street_actions(street: Street) -> [Action; 3] {
    match street {
        Street::Preflop => Action::PREFLOP,
        _ => Action::POSTFLOP,
    }
}

/// Run a survey, optionally reporting progress per finished chunk.
pub fn run(config: &SurveyConfig, progress: Option<&ProgressBar>) -> Result<SurveyReport> {
    info!(
        "surveying {} deals (seed {}, threads {:?})",
        config.deals, config.seed, config.threads
    );
    let tally = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| survey_chunks(config, progress))?,
        None => survey_chunks(config, progress)?,
    };
    if tally.violations > 0 {
        log::warn!("{} distributions failed validation", tally.violations);
    }
    Ok(SurveyReport::from_tally(config, tally))
}

fn survey_chunks(config: &SurveyConfig, progress: Option<&ProgressBar>) -> Result<Tally> {
    let chunks = config.deals.div_ceil(CHUNK_SIZE);
    (0..chunks)
        .into_par_iter()
        .map(|chunk| -> Result<Tally> {
            let start = chunk * CHUNK_SIZE;
            let len = CHUNK_SIZE.min(config.deals - start);
            let mut rng = StdRng::seed_from_u64(chunk_seed(config.seed, chunk));
            let mut tally = Tally::default();
            for _ in 0..len {
                survey_deal(&mut rng, &mut tally)?;
            }
            if let Some(bar) = progress {
                bar.inc(len as u64);
            }
            debug!("chunk {} done ({} deals)", chunk, len);
            Ok(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
}

/// Seed for a chunk, spread with a 64-bit mixing constant.
fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn survey_deal<R: Rng>(rng: &mut R, tally: &mut Tally) -> Result<()> {
    let hand = Hand::random(rng);
    let hole_cards = hand.deal(rng);
    let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
    let players = rng.gen_range(MIN_PLAYERS..=MAX_PLAYERS);
    let board = deal_cards(rng, &hole_cards.cards(), 5)?;

    let mut seen = FxHashSet::default();
    let distinct = hole_cards
        .cards()
        .iter()
        .chain(board.iter())
        .all(|card| seen.insert(*card));

    for street in Street::ALL {
        let advice = recommend(&hand, &board[..street.num_board_cards()], position, players)?;
        let dist = &advice.distribution;
        if !distinct || !dist.is_complete() {
            tally.violations += 1;
        }

        let cell = tally.cells.entry((street, position)).or_default();
        cell.spots += 1;
        for (action, freq) in dist.iter() {
            cell.freq[action.index()] += freq;
        }
        cell.primary[advice.primary().index()] += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey(deals: usize, seed: u64, threads: Option<usize>) -> SurveyReport {
        run(&SurveyConfig { deals, seed, threads }, None).unwrap()
    }

    #[test]
    fn test_every_street_counted_without_violations() {
        let report = survey(2_500, 11, None);
        assert_eq!(report.violations, 0);
        for street in Street::ALL {
            assert_eq!(report.spots(street), 2_500);
        }
    }

    #[test]
    fn test_means_sum_to_one() {
        let report = survey(1_500, 5, None);
        for row in &report.rows {
            let total: f64 = street_actions(row.street).iter().map(|&a| row.mean(a)).sum();
            assert!((total - 1.0).abs() < 1e-6, "{:?} {:?}", row.street, row.position);
        }
    }

    #[test]
    fn test_preflop_folds_most_hands() {
        let report = survey(3_000, 2, None);
        let utg = report.row(Street::Preflop, Position::UTG).unwrap();
        assert!(utg.mean(Action::Fold) > 0.5);
        let btn = report.row(Street::Preflop, Position::BTN).unwrap();
        assert!(btn.mean(Action::Fold) < utg.mean(Action::Fold));
    }

    #[test]
    fn test_thread_count_does_not_change_result() {
        let one = survey(3_000, 21, Some(1));
        let four = survey(3_000, 21, Some(4));
        assert_eq!(one.rows.len(), four.rows.len());
        for (a, b) in one.rows.iter().zip(&four.rows) {
            assert_eq!(a.spots, b.spots);
            for action in Action::ALL {
                assert!((a.mean(action) - b.mean(action)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_report_json() {
        let report = survey(200, 1, None);
        let json = serde_json::to_string(&report).unwrap();
        let back: SurveyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows.len(), report.rows.len());
        assert_eq!(back.spots(Street::River), 200);
    }
}
