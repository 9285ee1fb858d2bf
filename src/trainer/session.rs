//! Training session state machine.
//!
//! A session holds the current deal and walks it street by street:
//!
//! ```text
//! new_hand ──► Preflop ──advance──► Flop ──advance──► Turn ──advance──► River
//!                 │                  │                 (TurnRiver mode only)
//!                 └ Preflop mode     └ Postflop mode
//!                   stops here         stops here
//! ```
//!
//! In training mode the strategy stays hidden on each street until the user
//! makes one guess, which is scored against the primary action.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::config::{validate_player_count, GameMode, Mode, TrainerConfig};
use crate::cards::{deal_cards, Board, Card, Hand, HoleCards, Street};
use crate::error::{Result, TrainerError};
use crate::strategy::{
    flop_advice, preflop_advice, river_advice, turn_advice, Action, Advice, Position,
};

/// Running guess accuracy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of correct guesses, rounded to one decimal (0.0 before any guess).
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let pct = self.correct as f64 / self.total as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// Result of a scored guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub guess: Action,
    pub primary: Action,
    pub correct: bool,
    pub advice: Advice,
}

/// One trainer session.
#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    config: TrainerConfig,
    rng: R,
    hand: Hand,
    hole_cards: HoleCards,
    board: Board,
    street: Street,
    guess: Option<Action>,
    revealed: bool,
    score: Score,
}

impl Session<StdRng> {
    /// Start a session, seeding from the config when it has a seed.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with a caller-supplied RNG. Deals the first hand.
    pub fn with_rng(config: TrainerConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let hand = Hand::random(&mut rng);
        let hole_cards = hand.deal(&mut rng);
        let mut session = Self {
            config,
            rng,
            hand,
            hole_cards,
            board: Board::new(),
            street: Street::Preflop,
            guess: None,
            revealed: false,
            score: Score::default(),
        };
        session.reset_street_state();
        debug!("session started: {:?}", session.config);
        Ok(session)
    }

    /// Deal a fresh hand and go back to preflop.
    pub fn new_hand(&mut self) {
        self.hand = Hand::random(&mut self.rng);
        self.hole_cards = self.hand.deal(&mut self.rng);
        self.board.clear();
        self.street = Street::Preflop;
        self.reset_street_state();
        debug!("new hand {} ({})", self.hand, self.hole_cards);
    }

    /// Street after the current one, if the game mode allows it.
    pub fn next_street(&self) -> Option<Street> {
        match (self.config.game_mode, self.street) {
            (GameMode::Preflop, _) => None,
            (GameMode::Postflop, Street::Preflop) => Some(Street::Flop),
            (GameMode::Postflop, _) => None,
            (GameMode::TurnRiver, street) => street.next(),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.next_street().is_some()
    }

    /// Deal the next street's board cards.
    pub fn advance_street(&mut self) -> Result<Street> {
        let next = self.next_street().ok_or_else(|| TrainerError::NoFurtherStreet {
            street: self.street,
            game_mode: self.config.game_mode.to_string(),
        })?;

        let needed = next.num_board_cards() - self.board.len();
        let mut dead: Vec<Card> = self.hole_cards.cards().to_vec();
        dead.extend_from_slice(self.board.cards());
        for card in deal_cards(&mut self.rng, &dead, needed)? {
            self.board.add(card);
        }

        self.street = next;
        self.reset_street_state();
        debug!("advanced to {}: board {}", next, self.board);
        Ok(next)
    }

    /// Recommendation for the current street.
    pub fn advice(&self) -> Advice {
        let position = self.config.position;
        let cards = self.board.cards();
        match self.street {
            Street::Preflop => preflop_advice(&self.hand, position, self.config.player_count),
            Street::Flop => flop_advice(&self.hand, cards, position),
            Street::Turn => turn_advice(&self.hand, cards, position, self.config.player_count),
            Street::River => river_advice(&self.hand, cards, position),
        }
    }

    /// Actions offered as guesses on the current street.
    pub fn options(&self) -> &'static [Action] {
        match self.street {
            Street::Preflop => &Action::PREFLOP,
            _ => &Action::POSTFLOP,
        }
    }

    /// Score a guess against the primary action and reveal the strategy.
    pub fn guess(&mut self, action: Action) -> Result<GuessOutcome> {
        if self.config.mode != Mode::Training {
            return Err(TrainerError::NotTraining);
        }
        if let Some(previous) = self.guess {
            return Err(TrainerError::AlreadyGuessed(previous));
        }

        let advice = self.advice();
        let primary = advice.primary();
        let correct = action == primary;

        self.score.record(correct);
        self.guess = Some(action);
        self.revealed = true;
        debug!(
            "guess {} vs {} on {}: {}/{}",
            action, primary, self.street, self.score.correct, self.score.total
        );

        Ok(GuessOutcome {
            guess: action,
            primary,
            correct,
            advice,
        })
    }

    /// Switch reveal mode. Resets the score and deals a new hand.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.score.reset();
        self.new_hand();
    }

    /// Switch game mode and deal a new hand.
    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.config.game_mode = game_mode;
        self.new_hand();
    }

    /// Change the table size and deal a new hand.
    pub fn set_player_count(&mut self, player_count: u8) -> Result<()> {
        validate_player_count(player_count)?;
        self.config.player_count = player_count;
        self.new_hand();
        Ok(())
    }

    /// Change the hero position and deal a new hand.
    pub fn set_position(&mut self, position: Position) {
        self.config.position = position;
        self.new_hand();
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn hole_cards(&self) -> HoleCards {
        self.hole_cards
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn current_guess(&self) -> Option<Action> {
        self.guess
    }

    /// Whether the strategy may be shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> Score {
        self.score
    }

    fn reset_street_state(&mut self) {
        self.guess = None;
        self.revealed = self.config.mode == Mode::Practice;
    }
}
