//! Action-frequency distributions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::Action;

/// Tolerance used when checking that frequencies sum to one.
pub const FREQ_EPSILON: f64 = 1e-9;

/// Ordered mapping from action to frequency.
///
/// Entry order matters: the primary action breaks ties in favour of the entry
/// listed later. A completed distribution sums to 1.0, with any shortfall
/// assigned to fold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    entries: Vec<(Action, f64)>,
}

impl Distribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure strategy: one action at frequency 1.0.
    pub fn pure(action: Action) -> Self {
        Self::new().with(action, 1.0)
    }

    /// Postflop mix in bet, check, fold order, completed with fold.
    pub fn postflop(bet: f64, check: f64, fold: f64) -> Self {
        Self::new()
            .with(Action::Bet, bet)
            .with(Action::Check, check)
            .with(Action::Fold, fold)
            .complete()
    }

    /// Builder method: set the frequency of an action.
    pub fn with(mut self, action: Action, freq: f64) -> Self {
        self.set(action, freq);
        self
    }

    /// Set the frequency of an action, keeping its original position.
    pub fn set(&mut self, action: Action, freq: f64) {
        debug_assert!(freq >= 0.0, "frequency must be non-negative");
        match self.entries.iter_mut().find(|(a, _)| *a == action) {
            Some(entry) => entry.1 = freq,
            None => self.entries.push((action, freq)),
        }
    }

    /// Frequency of an action (0.0 when absent).
    pub fn get(&self, action: Action) -> f64 {
        self.entries
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, f)| f).sum()
    }

    /// Assign any missing mass to fold.
    pub fn complete(mut self) -> Self {
        let total = self.total();
        debug_assert!(total <= 1.0 + FREQ_EPSILON, "frequencies sum to {}", total);
        let remainder = 1.0 - total;
        if remainder > FREQ_EPSILON {
            let fold = self.get(Action::Fold);
            self.set(Action::Fold, fold + remainder);
        }
        self
    }

    /// Non-negative and sums to one.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, f)| *f >= 0.0) && (self.total() - 1.0).abs() <= FREQ_EPSILON
    }

    /// Highest-frequency action; later entries win ties.
    pub fn primary(&self) -> Action {
        self.entries
            .iter()
            .copied()
            .reduce(|best, next| if best.1 > next.1 { best } else { next })
            .map(|(a, _)| a)
            .unwrap_or(Action::Fold)
    }

    /// Entries in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries sorted by descending frequency (stable).
    pub fn sorted(&self) -> Vec<(Action, f64)> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .sorted()
            .iter()
            .map(|(a, freq)| format!("{} {:.0}%", a, freq * 100.0))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// A recommendation: completed distribution plus the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub distribution: Distribution,
    pub explanation: String,
}

impl Advice {
    pub fn new(distribution: Distribution, explanation: impl Into<String>) -> Self {
        Self {
            distribution,
            explanation: explanation.into(),
        }
    }

    /// Shortcut for the distribution's primary action.
    pub fn primary(&self) -> Action {
        self.distribution.primary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_adds_fold_remainder() {
        let dist = Distribution::new().with(Action::Raise, 0.85).complete();
        assert!((dist.get(Action::Fold) - 0.15).abs() < 1e-12);
        assert!(dist.is_complete());
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_completion_tops_up_existing_fold() {
        let dist = Distribution::postflop(0.75, 0.20, 0.0);
        assert!((dist.get(Action::Fold) - 0.05).abs() < 1e-12);
        assert!(dist.is_complete());

        let full = Distribution::postflop(0.45, 0.50, 0.05);
        assert!((full.get(Action::Fold) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_primary_action() {
        let dist = Distribution::new()
            .with(Action::Call, 0.80)
            .with(Action::Raise, 0.20)
            .complete();
        assert_eq!(dist.primary(), Action::Call);

        // Ties go to the later entry
        let tie = Distribution::new()
            .with(Action::Raise, 0.5)
            .with(Action::Fold, 0.5);
        assert_eq!(tie.primary(), Action::Fold);

        assert_eq!(Distribution::new().primary(), Action::Fold);
    }

    #[test]
    fn test_sorted_and_display() {
        let dist = Distribution::postflop(0.30, 0.65, 0.05);
        let sorted = dist.sorted();
        assert_eq!(sorted[0].0, Action::Check);
        assert_eq!(sorted[2].0, Action::Fold);
        assert_eq!(dist.to_string(), "check 65%, bet 30%, fold 5%");
    }
}
