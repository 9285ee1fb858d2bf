//! Strategy tables and heuristics.
//!
//! Every recommendation is an [`Advice`]: a completed action distribution plus
//! an explanation. [`recommend`] picks the right source from the board size.

pub mod action;
pub mod chart;
pub mod distribution;
pub mod postflop;
pub mod preflop;

pub use action::Action;
pub use chart::{generate_html, ChartBook, HandStrategy, RangeChart};
pub use distribution::{Advice, Distribution, FREQ_EPSILON};
pub use postflop::{flop_advice, river_advice, turn_advice, turn_factor};
pub use preflop::{lookup, preflop_advice, preflop_strategy, Entry, Position, TableFormat};

use crate::cards::{Card, Hand};
use crate::error::{Result, TrainerError};

/// Recommendation for a hand on a board of 0, 3, 4 or 5 cards.
pub fn recommend(
    hand: &Hand,
    board: &[Card],
    position: Position,
    player_count: u8,
) -> Result<Advice> {
    match board.len() {
        0 => Ok(preflop_advice(hand, position, player_count)),
        3 => Ok(flop_advice(hand, board, position)),
        4 => Ok(turn_advice(hand, board, position, player_count)),
        5 => Ok(river_advice(hand, board, position)),
        n => Err(TrainerError::InvalidBoard(n)),
    }
}
