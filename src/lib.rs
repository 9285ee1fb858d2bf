//! # GTO Trainer
//!
//! A poker strategy trainer. It deals a random hand (and board on later
//! streets), recommends an action mix, and can quiz the user before revealing
//! the recommendation.
//!
//! ## Features
//!
//! - **Preflop tables**: opening and defending frequencies for 6-max and 9-max
//! - **Postflop heuristics**: flop, turn and river cascades driven by board
//!   texture and how the hand connects
//! - **Sessions**: practice (always revealed) and training (guess first, scored)
//! - **Exports**: 13x13 range charts as text, JSON and HTML
//! - **Survey**: parallel Monte Carlo check of every strategy function
//!
//! ## Quick Start
//!
//! ```
//! use gto_trainer::trainer::{GameMode, Mode, Session, TrainerConfig};
//!
//! let config = TrainerConfig::new()
//!     .with_mode(Mode::Training)
//!     .with_game_mode(GameMode::TurnRiver)
//!     .with_seed(42);
//! let mut session = Session::new(config).unwrap();
//!
//! let primary = session.advice().primary();
//! let outcome = session.guess(primary).unwrap();
//! assert!(outcome.correct);
//!
//! session.advance_street().unwrap(); // flop
//! assert_eq!(session.board().len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, hole cards, boards, hand classes and dealing
//! - [`analysis`]: board texture and hand-vs-board classification
//! - [`strategy`]: action distributions, preflop tables, postflop heuristics, charts
//! - [`trainer`]: configuration, session state machine and terminal rendering
//! - [`survey`]: parallel survey of the strategy functions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Session                                 │
//! │  - deal hand / board      - street progression                  │
//! │  - guess scoring          - settings                            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ advice for the current street
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌───────────┐         ┌───────────┐
//!    │ Preflop │         │   Flop /  │         │   River   │
//!    │ Tables  │         │   Turn    │         │  Cascade  │
//!    └─────────┘         └───────────┘         └───────────┘
//!                               │
//!                               ▼
//!                  Texture + Pairing + Draws
//! ```

pub mod analysis;
pub mod cards;
pub mod error;
pub mod strategy;
pub mod survey;
pub mod trainer;

pub use cards::{Board, Card, Hand, HoleCards, Street};
pub use error::{Result, TrainerError};
pub use strategy::{recommend, Action, Advice, Distribution, Position, TableFormat};
pub use trainer::{GameMode, Mode, Session, TrainerConfig};

/// Initialize terminal logging for the binaries.
pub fn init_logging(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger already initialized: {}", e);
    }
}
