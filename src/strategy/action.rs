//! Player actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;

/// An action the hero can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl Action {
    /// Every action, in display order.
    pub const ALL: [Action; 5] = [
        Action::Fold,
        Action::Check,
        Action::Call,
        Action::Bet,
        Action::Raise,
    ];

    /// Actions offered before the flop.
    pub const PREFLOP: [Action; 3] = [Action::Fold, Action::Call, Action::Raise];

    /// Actions offered after the flop.
    pub const POSTFLOP: [Action; 3] = [Action::Bet, Action::Check, Action::Fold];

    /// Position in [`Action::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet => "bet",
            Action::Raise => "raise",
        }
    }

    /// Capitalized name for menus.
    pub fn title(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Bet => "Bet",
            Action::Raise => "Raise",
        }
    }

    /// Whether the action puts chips in the pot.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet | Action::Raise)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("raise".parse::<Action>().unwrap(), Action::Raise);
        assert_eq!(" Check ".parse::<Action>().unwrap(), Action::Check);
        assert!("shove".parse::<Action>().is_err());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_aggression() {
        assert!(Action::Bet.is_aggressive());
        assert!(!Action::Call.is_aggressive());
    }
}
