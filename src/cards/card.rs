//! Cards and dealing.
//!
//! - `Card`: one playing card, stored as `rank * 4 + suit`
//! - `HoleCards`: the two concrete cards dealt to the hero
//! - `Board`: community cards (0, 3, 4 or 5 cards)
//! - `Deck`: live cards left after removing the dead ones

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;

/// Rank characters, deuce (rank 0) to ace (rank 12).
pub const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters: clubs, diamonds, hearts, spades.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

const SUIT_SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// Parse a rank character. Broadway letters may be lowercase.
pub fn parse_rank(c: char) -> Option<u8> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c.to_ascii_uppercase())
        .map(|r| r as u8)
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    id: u8,
}

impl Card {
    /// Card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13 && suit < 4);
        Self { id: rank * 4 + suit }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Face value used by the board heuristics (2-14, ace high).
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank() + 2
    }

    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    pub fn suit_symbol(&self) -> char {
        SUIT_SYMBOLS[self.suit() as usize]
    }

    /// Diamonds or hearts.
    pub fn is_red(&self) -> bool {
        matches!(SUIT_CHARS[self.suit() as usize], 'd' | 'h')
    }
}

impl FromStr for Card {
    type Err = TrainerError;

    /// Parse "As", "kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrainerError::InvalidCard(s.to_string());
        let mut chars = s.trim().chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = parse_rank(r).ok_or_else(invalid)?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == u.to_ascii_lowercase())
            .ok_or_else(invalid)?;
        Ok(Self::new(rank, suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), SUIT_CHARS[self.suit() as usize])
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The hero's two hole cards, higher rank first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    pub card1: Card,
    pub card2: Card,
}

impl HoleCards {
    pub fn new(a: Card, b: Card) -> Self {
        debug_assert!(a != b, "hole cards must be distinct");
        let (card1, card2) = if a.rank() >= b.rank() { (a, b) } else { (b, a) };
        Self { card1, card2 }
    }

    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Community cards in dealing order.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn add(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 5);
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for Board {
    type Err = TrainerError;

    /// Parse concatenated cards such as "AhKsQd" (spaces allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(' ', "");
        if s.len() % 2 != 0 || s.len() > 10 || !s.is_ascii() {
            return Err(TrainerError::InvalidCard(s));
        }

        let mut board = Self::new();
        for i in (0..s.len()).step_by(2) {
            let card: Card = s[i..i + 2].parse()?;
            if board.cards.contains(&card) {
                return Err(TrainerError::InvalidCard(s));
            }
            board.add(card);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cards.iter().try_for_each(|card| write!(f, "{}", card))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Betting round of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Board size once this street is dealt.
    pub fn num_board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };
        f.write_str(name)
    }
}

/// Cards still available to deal.
#[derive(Debug, Clone)]
pub struct Deck {
    live: Vec<Card>,
}

impl Deck {
    /// Full deck minus the dead cards.
    pub fn without(dead: &[Card]) -> Self {
        let live = (0..13u8)
            .flat_map(|rank| (0..4u8).map(move |suit| Card::new(rank, suit)))
            .filter(|card| !dead.contains(card))
            .collect();
        Self { live }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.live.shuffle(rng);
    }

    /// Take `n` cards off the top.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, TrainerError> {
        if n > self.live.len() {
            return Err(TrainerError::DeckExhausted);
        }
        Ok(self.live.split_off(self.live.len() - n))
    }

    pub fn remaining(&self) -> usize {
        self.live.len()
    }
}

/// Deal `n` shuffled cards that avoid every card in `dead`.
pub fn deal_cards<R: Rng>(rng: &mut R, dead: &[Card], n: usize) -> Result<Vec<Card>, TrainerError> {
    let mut deck = Deck::without(dead);
    deck.shuffle(rng);
    deck.deal_n(n)
}
