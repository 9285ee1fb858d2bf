//! Board and hand analysis.
//!
//! - [`texture`]: suit and rank composition of the board
//! - [`classify`]: how a starting hand connects with the board (pairs, draws)

pub mod classify;
pub mod texture;

pub use classify::{Draws, PairTier, Pairing};
pub use texture::{Height, SuitClass, Texture};
