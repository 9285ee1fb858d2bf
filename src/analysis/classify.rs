//! How a starting hand connects with a board.
//!
//! Both classifiers work on the hand class (ranks and suitedness), not on
//! concrete hole cards. The thresholds are fixed rules of thumb.

use serde::{Deserialize, Serialize};

use super::texture::Texture;
use crate::cards::{Card, Hand};

/// Closest board distance that can still be part of an open-ended draw.
pub const OESD_NEAREST: u8 = 1;
/// Second-closest board distance for an open-ended draw.
pub const OESD_SECOND: u8 = 2;
/// Closest board distance for a gutshot.
pub const GUTSHOT_NEAREST: u8 = 2;
/// Second-closest board distance for a gutshot.
pub const GUTSHOT_SECOND: u8 = 3;

/// Strength of the pair a hand makes with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairTier {
    None,
    Bottom,
    Middle,
    Top,
}

/// Made-hand summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub set: bool,
    pub two_pair: bool,
    pub overpair: bool,
    pub tier: PairTier,
}

impl Pairing {
    /// Classify a hand against 3-5 board cards.
    ///
    /// Sets, two pair and overpairs all count as the top tier. Otherwise the
    /// hole rank that hits the board (first card preferred) is compared with the
    /// highest and second-highest board values.
    pub fn classify(hand: &Hand, board: &[Card]) -> Self {
        debug_assert!(!board.is_empty());
        let mut values: Vec<u8> = board.iter().map(Card::value).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));

        let [v1, v2] = hand.values();
        let made1 = values.contains(&v1);
        let made2 = values.contains(&v2);

        let set = hand.is_pair() && made1;
        let two_pair = !hand.is_pair() && made1 && made2;
        let overpair = hand.is_pair() && v1 > values[0];

        let tier = if set || two_pair || overpair {
            PairTier::Top
        } else if !made1 && !made2 {
            PairTier::None
        } else {
            let hit = if made1 { v1 } else { v2 };
            if hit == values[0] {
                PairTier::Top
            } else if values.get(1) == Some(&hit) {
                PairTier::Middle
            } else {
                PairTier::Bottom
            }
        };

        Self {
            set,
            two_pair,
            overpair,
            tier,
        }
    }

    /// Set or two pair.
    pub fn is_monster(&self) -> bool {
        self.set || self.two_pair
    }

    /// Short name of the made hand for explanations.
    pub fn describe(&self) -> &'static str {
        if self.set {
            "set"
        } else if self.two_pair {
            "two pair"
        } else if self.overpair {
            "overpair"
        } else {
            match self.tier {
                PairTier::Top => "top pair",
                PairTier::Middle => "middle pair",
                PairTier::Bottom => "bottom pair",
                PairTier::None => "no pair",
            }
        }
    }
}

/// Drawing potential of a hand on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Draws {
    pub flush_draw: bool,
    pub backdoor_flush_draw: bool,
    pub oesd: bool,
    pub gutshot: bool,
    pub two_overcards: bool,
    pub one_overcard: bool,
}

impl Draws {
    /// Detect draws from rank distances between hole and board values.
    pub fn classify(hand: &Hand, board: &[Card], texture: &Texture) -> Self {
        debug_assert!(board.len() >= 2);
        let hole = hand.values();

        let flush_draw =
            hand.suited && (texture.suit_counts.iter().any(|&n| n == 2) || texture.is_monotone());
        let backdoor_flush_draw = hand.suited && texture.is_rainbow();

        let (near1, second1) = nearest_distances(hole[0], board);
        let (near2, second2) = nearest_distances(hole[1], board);
        let nearest = near1.min(near2);
        let second = second1.min(second2);

        let oesd = nearest <= OESD_NEAREST && second <= OESD_SECOND && texture.connected;
        let gutshot = !oesd
            && ((nearest <= GUTSHOT_NEAREST && second <= GUTSHOT_SECOND) || texture.connected);

        let top = texture.top_value();
        let overcards = hole.iter().filter(|&&v| v > top).count();

        Self {
            flush_draw,
            backdoor_flush_draw,
            oesd,
            gutshot,
            two_overcards: overcards == 2,
            one_overcard: overcards == 1,
        }
    }

    /// Flush draw or open-ended straight draw.
    pub fn is_strong(&self) -> bool {
        self.flush_draw || self.oesd
    }

    /// Gutshot, backdoor flush draw or overcards.
    pub fn is_speculative(&self) -> bool {
        self.gutshot || self.backdoor_flush_draw || self.two_overcards || self.one_overcard
    }

    /// Any straight or flush draw (what can miss on the river).
    pub fn any_draw(&self) -> bool {
        self.flush_draw || self.oesd || self.gutshot
    }
}

/// Smallest and second-smallest distance from `value` to the board values.
fn nearest_distances(value: u8, board: &[Card]) -> (u8, u8) {
    let mut diffs: Vec<u8> = board.iter().map(|c| c.value().abs_diff(value)).collect();
    diffs.sort_unstable();
    (diffs[0], diffs[1])
}
