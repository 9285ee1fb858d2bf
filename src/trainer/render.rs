//! Terminal rendering for the trainer.

use colored::{ColoredString, Colorize};

use super::session::{GuessOutcome, Score, Session};
use crate::analysis::Texture;
use crate::cards::{Card, Street};
use crate::strategy::{Action, Advice, Distribution};
use rand::Rng;

/// Width of a full frequency bar.
pub const BAR_WIDTH: usize = 30;

/// A card with its suit symbol, red for hearts and diamonds.
pub fn card(card: Card) -> ColoredString {
    let text = format!("{}{}", card.rank_char(), card.suit_symbol());
    if card.is_red() {
        text.red().bold()
    } else {
        text.bold()
    }
}

pub fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|&c| card(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Action name colored by its kind.
pub fn action(action: Action) -> ColoredString {
    let title = action.title();
    match action {
        Action::Raise | Action::Bet => title.green().bold(),
        Action::Call | Action::Check => title.blue().bold(),
        Action::Fold => title.red().bold(),
    }
}

/// Horizontal bar, `freq` of [`BAR_WIDTH`] filled.
pub fn bar(freq: f64) -> String {
    let filled = ((freq.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// One line per action, highest frequency first.
pub fn distribution(dist: &Distribution) -> Vec<String> {
    dist.sorted()
        .into_iter()
        .map(|(a, freq)| {
            let line = format!("{:<6} {} {:>3.0}%", a.title(), bar(freq), freq * 100.0);
            match a {
                Action::Raise | Action::Bet => line.green().to_string(),
                Action::Call | Action::Check => line.blue().to_string(),
                Action::Fold => line.red().to_string(),
            }
        })
        .collect()
}

pub fn score(score: &Score) -> String {
    format!(
        "Score: {}/{} ({:.1}%)",
        score.correct,
        score.total,
        score.accuracy()
    )
}

/// Header block: settings, street, hole cards and board.
pub fn table<R: Rng>(session: &Session<R>) -> String {
    let config = session.config();
    let hand = session.hand();
    let mut out = format!(
        "{} | {} | {} players | {}\n",
        config.mode.name().to_uppercase().dimmed(),
        config.game_mode.title().dimmed(),
        config.player_count,
        config.position.name().cyan().bold()
    );
    out.push_str(&format!("{}\n", session.street().to_string().yellow().bold()));
    out.push_str(&format!(
        "Hand:  {}  {} ({})\n",
        cards(&session.hole_cards().cards()),
        hand.to_string().bold(),
        hand.kind()
    ));
    if session.street() != Street::Preflop {
        let board = session.board().cards();
        out.push_str(&format!(
            "Board: {}  [{}]\n",
            cards(board),
            flop_label(board).italic()
        ));
    }
    out
}

/// Texture label of the flop, kept on the turn and river.
fn flop_label(board: &[Card]) -> String {
    Texture::analyze(&board[..board.len().min(3)]).label()
}

/// Strategy block: bars plus explanation.
pub fn advice(advice: &Advice) -> String {
    let mut out = format!("Recommended: {}\n", action(advice.primary()));
    for line in distribution(&advice.distribution) {
        out.push_str(&format!("  {}\n", line));
    }
    out.push_str(&format!("{}\n", advice.explanation.italic()));
    out
}

/// Verdict line after a guess.
pub fn outcome(outcome: &GuessOutcome) -> String {
    if outcome.correct {
        format!("{} {} is the primary action.", "Correct!".green().bold(), action(outcome.guess))
    } else {
        format!(
            "{} You chose {}, the primary action is {}.",
            "Not quite.".red().bold(),
            action(outcome.guess),
            action(outcome.primary)
        )
    }
}
