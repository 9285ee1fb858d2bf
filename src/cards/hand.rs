//! Starting-hand classes.
//!
//! There are 169 strategically distinct preflop hands:
//! - 13 pairs (AA, KK, ..., 22)
//! - 78 suited hands (AKs, AQs, ..., 32s)
//! - 78 offsuit hands (AKo, AQo, ..., 32o)
//!
//! Internal index order: pairs (0-12), suited (13-90), offsuit (91-168).
//! Chart order is the usual 13x13 grid with AA top-left, suited hands above
//! the diagonal and offsuit hands below it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use super::card::{parse_rank, Card, HoleCards, RANK_CHARS};
use crate::error::TrainerError;

/// Number of distinct starting-hand classes.
pub const NUM_HANDS: usize = 169;

/// A starting hand with suits abstracted away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Rank of first card (higher)
    pub rank1: u8,
    /// Rank of second card (lower or equal)
    pub rank2: u8,
    /// Whether suited (always false for pairs)
    pub suited: bool,
}

impl Hand {
    /// Build a hand class, ordering the ranks high first.
    pub fn new(rank_a: u8, rank_b: u8, suited: bool) -> Self {
        debug_assert!(rank_a < 13 && rank_b < 13);
        let (rank1, rank2) = if rank_a >= rank_b { (rank_a, rank_b) } else { (rank_b, rank_a) };
        Self {
            rank1,
            rank2,
            suited: suited && rank1 != rank2,
        }
    }

    /// Hand class of concrete hole cards.
    pub fn of(hole_cards: &HoleCards) -> Self {
        Self::new(
            hole_cards.card1.rank(),
            hole_cards.card2.rank(),
            hole_cards.is_suited(),
        )
    }

    /// Hand class at an index below `NUM_HANDS`.
    fn from_index(index: u8) -> Self {
        if index < 13 {
            Self { rank1: index, rank2: index, suited: false }
        } else if index < 91 {
            let (r1, r2) = decode_triangular(index - 13);
            Self { rank1: r1, rank2: r2, suited: true }
        } else {
            let (r1, r2) = decode_triangular(index - 91);
            Self { rank1: r1, rank2: r2, suited: false }
        }
    }

    /// Get the hand class index (0-168).
    pub fn index(&self) -> u8 {
        if self.is_pair() {
            self.rank1
        } else if self.suited {
            13 + encode_triangular(self.rank1, self.rank2)
        } else {
            91 + encode_triangular(self.rank1, self.rank2)
        }
    }

    /// Iterate every hand class in index order.
    pub fn all() -> impl Iterator<Item = Hand> {
        (0..NUM_HANDS as u8).map(Self::from_index)
    }

    /// Draw a hand class uniformly over the 169 classes.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_index(rng.gen_range(0..NUM_HANDS as u8))
    }

    /// Pick concrete suits for this class.
    pub fn deal<R: Rng>(&self, rng: &mut R) -> HoleCards {
        let mut suits = [0u8, 1, 2, 3];
        suits.shuffle(rng);
        let second_suit = if self.suited { suits[0] } else { suits[1] };
        HoleCards::new(
            Card::new(self.rank1, suits[0]),
            Card::new(self.rank2, second_suit),
        )
    }

    /// Check if the hand is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.rank1 == self.rank2
    }

    /// Face values (2-14) of both cards, higher first.
    pub fn values(&self) -> [u8; 2] {
        [self.rank1 + 2, self.rank2 + 2]
    }

    /// Number of concrete combinations for this class.
    pub fn num_combos(&self) -> u8 {
        if self.is_pair() {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }

    /// Display label ("AKs", "QQ", "72o").
    pub fn label(&self) -> String {
        let r1 = RANK_CHARS[self.rank1 as usize];
        let r2 = RANK_CHARS[self.rank2 as usize];
        if self.is_pair() {
            format!("{}{}", r1, r2)
        } else {
            format!("{}{}{}", r1, r2, if self.suited { 's' } else { 'o' })
        }
    }

    /// Human description of the hand type.
    pub fn kind(&self) -> &'static str {
        if self.is_pair() {
            "Pocket Pair"
        } else if self.suited {
            "Suited"
        } else {
            "Offsuit"
        }
    }

    /// Position in the 13x13 chart as (row, col).
    pub fn grid_position(&self) -> (usize, usize) {
        let high = (12 - self.rank1) as usize;
        let low = (12 - self.rank2) as usize;
        if self.is_pair() {
            (high, high)
        } else if self.suited {
            (high, low)
        } else {
            (low, high)
        }
    }
}

impl FromStr for Hand {
    type Err = TrainerError;

    /// Parse a label like "AA", "AKs" or "72o".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrainerError::InvalidHand(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let r1 = parse_rank(chars[0]).ok_or_else(invalid)?;
        let r2 = parse_rank(chars[1]).ok_or_else(invalid)?;

        match (r1 == r2, chars.get(2).map(|c| c.to_ascii_lowercase())) {
            (true, None) => Ok(Self::new(r1, r2, false)),
            (false, Some('s')) => Ok(Self::new(r1, r2, true)),
            (false, Some('o')) => Ok(Self::new(r1, r2, false)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Encode two ranks (r1 > r2) as a triangular index.
fn encode_triangular(r1: u8, r2: u8) -> u8 {
    debug_assert!(r1 > r2);
    r1 * (r1 - 1) / 2 + r2
}

/// Decode triangular index to two ranks (r1 > r2)
fn decode_triangular(idx: u8) -> (u8, u8) {
    let mut r1 = 1u8;
    let mut remaining = idx;
    while remaining >= r1 {
        remaining -= r1;
        r1 += 1;
    }
    (r1, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_index_roundtrip_covers_all_classes() {
        let labels: HashSet<String> = Hand::all().map(|h| h.label()).collect();
        assert_eq!(labels.len(), NUM_HANDS);
        for (i, hand) in Hand::all().enumerate() {
            assert_eq!(hand.index() as usize, i);
        }
        let combos: usize = Hand::all().map(|h| h.num_combos() as usize).sum();
        assert_eq!(combos, 1326);
    }

    #[test]
    fn test_parse_labels() {
        let aa: Hand = "AA".parse().unwrap();
        assert!(aa.is_pair());
        assert_eq!(aa.rank1, 12);

        let aks: Hand = "AKs".parse().unwrap();
        assert_eq!((aks.rank1, aks.rank2, aks.suited), (12, 11, true));

        let seven_two: Hand = "27o".parse().unwrap();
        assert_eq!((seven_two.rank1, seven_two.rank2), (5, 0));
        assert_eq!(seven_two.label(), "72o");

        assert!("AAs".parse::<Hand>().is_err());
        assert!("AK".parse::<Hand>().is_err());
        assert!("A1s".parse::<Hand>().is_err());
    }

    #[test]
    fn test_grid_positions() {
        assert_eq!("AA".parse::<Hand>().unwrap().grid_position(), (0, 0));
        assert_eq!("KK".parse::<Hand>().unwrap().grid_position(), (1, 1));
        assert_eq!("AKs".parse::<Hand>().unwrap().grid_position(), (0, 1));
        assert_eq!("AKo".parse::<Hand>().unwrap().grid_position(), (1, 0));
        assert_eq!("22".parse::<Hand>().unwrap().grid_position(), (12, 12));

        let cells: HashSet<(usize, usize)> = Hand::all().map(|h| h.grid_position()).collect();
        assert_eq!(cells.len(), NUM_HANDS);
        assert!(cells.iter().all(|&(row, col)| row < 13 && col < 13));
    }

    #[test]
    fn test_random_classes_decode_valid_ranks() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let hand = Hand::random(&mut rng);
            assert!(hand.rank1 < 13 && hand.rank2 <= hand.rank1);
            assert!((hand.index() as usize) < NUM_HANDS);
            assert_eq!(hand.label().parse::<Hand>().unwrap(), hand);
        }
    }

    #[test]
    fn test_dealt_hole_cards_match_class() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let hand = Hand::random(&mut rng);
            let hole = hand.deal(&mut rng);
            assert_ne!(hole.card1, hole.card2);
            assert_eq!(Hand::of(&hole), hand);
        }
    }
}
