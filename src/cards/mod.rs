//! Cards, starting-hand classes and dealing.

pub mod card;
pub mod hand;

pub use card::{deal_cards, Board, Card, Deck, HoleCards, Street};
pub use hand::{Hand, NUM_HANDS};
