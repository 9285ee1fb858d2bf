//! Crate-wide error type.

use thiserror::Error;

use crate::cards::Street;
use crate::strategy::Action;

/// Errors that can occur in the trainer.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid hand label: {0}")]
    InvalidHand(String),

    #[error("Board must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoard(usize),

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Player count {0} is out of range [2, 9]")]
    InvalidPlayerCount(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No street after {street} in {game_mode} mode")]
    NoFurtherStreet { street: Street, game_mode: String },

    #[error("Guessing is only available in training mode")]
    NotTraining,

    #[error("Already guessed {0} on this street")]
    AlreadyGuessed(Action),

    #[error("Deck ran out of cards")]
    DeckExhausted,

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrainerError>;
