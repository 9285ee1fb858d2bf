//! Session controller and its terminal presentation.

pub mod config;
pub mod render;
pub mod session;

pub use config::{GameMode, Mode, TrainerConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use session::{GuessOutcome, Score, Session};
