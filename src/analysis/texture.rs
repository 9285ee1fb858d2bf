//! Board texture classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Largest gap between neighbouring board values that still counts as connected.
pub const CONNECTED_MAX_GAP: u8 = 3;

/// Values at or above this (queen) make a board high.
pub const HIGH_CARD_VALUE: u8 = 12;

/// Values at or below this (ten) keep a board low.
pub const LOW_CARD_VALUE: u8 = 10;

/// How many suits the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitClass {
    /// One suit.
    Monotone,
    /// Two suits.
    TwoTone,
    /// Exactly three suits.
    Rainbow,
    /// All four suits (turn and river only). Not rainbow, not two-tone.
    FourSuit,
}

impl SuitClass {
    /// Label word, none for four suits.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SuitClass::Monotone => Some("Monotone"),
            SuitClass::TwoTone => Some("Two-Tone"),
            SuitClass::Rainbow => Some("Rainbow"),
            SuitClass::FourSuit => None,
        }
    }
}

/// Rank height of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    High,
    Mid,
    Low,
}

impl Height {
    pub fn label(&self) -> &'static str {
        match self {
            Height::High => "High",
            Height::Mid => "Mid",
            Height::Low => "Low",
        }
    }
}

/// Texture summary of a 3-5 card board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub suit_class: SuitClass,
    /// Number of board cards per suit, indexed by suit id.
    pub suit_counts: [u8; 4],
    pub paired: bool,
    pub connected: bool,
    pub height: Height,
    /// Board values (2-14) sorted high to low.
    pub values: Vec<u8>,
}

impl Texture {
    /// Classify a board. Expects 3 to 5 cards.
    pub fn analyze(board: &[Card]) -> Self {
        debug_assert!((3..=5).contains(&board.len()), "texture needs 3-5 cards");

        let mut suit_counts = [0u8; 4];
        for card in board {
            suit_counts[card.suit() as usize] += 1;
        }
        let suit_class = match suit_counts.iter().filter(|&&n| n > 0).count() {
            1 => SuitClass::Monotone,
            2 => SuitClass::TwoTone,
            3 => SuitClass::Rainbow,
            _ => SuitClass::FourSuit,
        };

        let mut values: Vec<u8> = board.iter().map(Card::value).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));

        let paired = values.windows(2).any(|w| w[0] == w[1]);
        // Only the three highest values count, even on the turn and river
        let top_three = &values[..values.len().min(3)];
        let connected = top_three.windows(2).all(|w| w[0] - w[1] <= CONNECTED_MAX_GAP);

        let height = if values.iter().any(|&v| v >= HIGH_CARD_VALUE) {
            Height::High
        } else if values.iter().all(|&v| v <= LOW_CARD_VALUE) {
            Height::Low
        } else {
            Height::Mid
        };

        Self {
            suit_class,
            suit_counts,
            paired,
            connected,
            height,
            values,
        }
    }

    pub fn is_monotone(&self) -> bool {
        self.suit_class == SuitClass::Monotone
    }

    pub fn is_two_tone(&self) -> bool {
        self.suit_class == SuitClass::TwoTone
    }

    pub fn is_rainbow(&self) -> bool {
        self.suit_class == SuitClass::Rainbow
    }

    /// Monotone, two-tone or connected.
    pub fn is_wet(&self) -> bool {
        self.is_monotone() || self.is_two_tone() || self.connected
    }

    /// Highest board value.
    pub fn top_value(&self) -> u8 {
        self.values[0]
    }

    /// Words describing the board, e.g. "Paired Two-Tone Connected High".
    pub fn label(&self) -> String {
        let mut words = Vec::with_capacity(4);
        if self.paired {
            words.push("Paired");
        }
        words.extend(self.suit_class.label());
        words.push(if self.connected { "Connected" } else { "Disconnected" });
        words.push(self.height.label());
        words.join(" ")
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
