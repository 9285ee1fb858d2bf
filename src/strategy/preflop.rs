//! Preflop opening and defending tables.
//!
//! Tables are keyed by table format and position; each entry lists the call and
//! raise frequencies of a hand. Hands missing from a table fold 100%, and any
//! listed entry that sums below one folds the remainder.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::action::Action;
use super::distribution::{Advice, Distribution};
use crate::cards::Hand;
use crate::error::TrainerError;

/// Hero seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Position {
    UTG,
    CO,
    BTN,
    SB,
    BB,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::UTG,
        Position::CO,
        Position::BTN,
        Position::SB,
        Position::BB,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::CO => "CO",
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }

    /// Button and cutoff act last postflop.
    pub fn in_position(&self) -> bool {
        matches!(self, Position::BTN | Position::CO)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Position {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownPosition(s.to_string()))
    }
}

/// Table size the preflop ranges were built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableFormat {
    SixMax,
    NineMax,
}

impl TableFormat {
    pub const ALL: [TableFormat; 2] = [TableFormat::SixMax, TableFormat::NineMax];

    /// Up to six players use the 6-max ranges.
    pub fn for_players(player_count: u8) -> Self {
        if player_count <= 6 {
            TableFormat::SixMax
        } else {
            TableFormat::NineMax
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TableFormat::SixMax => "6max",
            TableFormat::NineMax => "9max",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of a preflop table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub hand: &'static str,
    pub call: f64,
    pub raise: f64,
}

impl Entry {
    /// Distribution in call, raise order, completed with fold.
    pub fn distribution(&self) -> Distribution {
        let mut dist = Distribution::new();
        if self.call > 0.0 {
            dist.set(Action::Call, self.call);
        }
        if self.raise > 0.0 {
            dist.set(Action::Raise, self.raise);
        }
        dist.complete()
    }
}

const fn r(hand: &'static str, raise: f64) -> Entry {
    Entry { hand, call: 0.0, raise }
}

const fn c(hand: &'static str, call: f64) -> Entry {
    Entry { hand, call, raise: 0.0 }
}

const fn cr(hand: &'static str, call: f64, raise: f64) -> Entry {
    Entry { hand, call, raise }
}

#[rustfmt::skip]
const SIX_MAX_UTG: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 0.95), r("88", 0.80), r("77", 0.65),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 0.85),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 0.90),
    r("QJs", 1.0), r("JTs", 1.0),
];

#[rustfmt::skip]
const SIX_MAX_CO: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 1.0), r("77", 0.90),
    r("66", 0.80), r("55", 0.70),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 0.90), r("A8s", 0.80), r("A5s", 0.85),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 1.0), r("ATo", 0.90),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0), r("K9s", 0.85),
    r("KQo", 1.0), r("KJo", 0.95),
    r("QJs", 1.0), r("QTs", 1.0), r("Q9s", 0.85),
    r("JTs", 1.0), r("J9s", 0.90), r("T9s", 1.0),
    r("98s", 0.95), r("87s", 0.95), r("76s", 0.95), r("65s", 0.95),
];

#[rustfmt::skip]
const SIX_MAX_BTN: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 1.0), r("77", 1.0),
    r("66", 0.95), r("55", 0.90), r("44", 0.85), r("33", 0.80), r("22", 0.75),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 1.0), r("A8s", 0.95), r("A7s", 0.90), r("A6s", 0.85),
    r("A5s", 1.0), r("A4s", 0.95), r("A3s", 0.90), r("A2s", 0.85),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 1.0), r("ATo", 1.0),
    r("A9o", 0.85), r("A8o", 0.70), r("A5o", 0.65),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0), r("K9s", 1.0),
    r("K8s", 0.90), r("K7s", 0.80),
    r("KQo", 1.0), r("KJo", 1.0), r("KTo", 0.95), r("K9o", 0.75),
    r("QJs", 1.0), r("QTs", 1.0), r("Q9s", 1.0), r("Q8s", 0.90),
    r("QJo", 1.0), r("QTo", 0.90), r("Q9o", 0.75),
    r("JTs", 1.0), r("J9s", 1.0), r("J8s", 0.95), r("J7s", 0.85),
    r("JTo", 0.95), r("J9o", 0.80),
    r("T9s", 1.0), r("T8s", 1.0), r("T7s", 0.95), r("T9o", 0.90),
    r("98s", 1.0), r("97s", 0.95), r("87s", 1.0), r("86s", 0.95),
    r("76s", 1.0), r("75s", 0.95), r("65s", 1.0), r("54s", 1.0),
];

#[rustfmt::skip]
const SIX_MAX_SB: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 1.0), r("77", 0.95),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 1.0), r("A5s", 0.90),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 1.0), r("ATo", 0.90),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0),
    r("QJs", 1.0), r("QTs", 1.0), r("JTs", 1.0), r("T9s", 1.0),
];

/// Big blind defence is shared by both formats.
#[rustfmt::skip]
const BB_DEFENSE: &[Entry] = &[
    cr("AA", 0.80, 0.20), cr("KK", 0.80, 0.20),
    cr("QQ", 0.85, 0.15), cr("JJ", 0.90, 0.10),
    c("TT", 0.95), c("99", 1.0), c("88", 1.0),
    cr("AKs", 0.75, 0.25), cr("AQs", 0.85, 0.15),
    c("AJs", 0.95), c("ATs", 1.0),
    cr("AKo", 0.80, 0.20), c("AQo", 0.95),
    c("KQs", 0.95), c("KJs", 1.0), c("QJs", 1.0),
];

#[rustfmt::skip]
const NINE_MAX_UTG: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 0.85), r("88", 0.65),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 0.90),
    r("AKo", 1.0), r("AQo", 0.85),
    r("KQs", 1.0), r("KJs", 1.0), r("QJs", 1.0), r("JTs", 0.85),
];

#[rustfmt::skip]
const NINE_MAX_CO: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 0.95), r("77", 0.85),
    r("66", 0.75), r("55", 0.65),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 0.85), r("A5s", 0.75),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 0.95), r("ATo", 0.80),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0),
    r("KQo", 1.0), r("KJo", 0.85),
    r("QJs", 1.0), r("QTs", 1.0), r("JTs", 1.0),
    r("T9s", 0.90), r("98s", 0.85), r("87s", 0.75), r("76s", 0.70),
];

#[rustfmt::skip]
const NINE_MAX_BTN: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 1.0), r("77", 0.95),
    r("66", 0.90), r("55", 0.85), r("44", 0.80), r("33", 0.75), r("22", 0.70),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 1.0), r("A8s", 0.90), r("A7s", 0.85), r("A5s", 0.95),
    r("A4s", 0.90), r("A3s", 0.85), r("A2s", 0.80),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 1.0), r("ATo", 0.95),
    r("A9o", 0.80), r("A8o", 0.60), r("A5o", 0.55),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0), r("K9s", 0.95),
    r("K8s", 0.80), r("K7s", 0.70),
    r("KQo", 1.0), r("KJo", 0.95), r("KTo", 0.85),
    r("QJs", 1.0), r("QTs", 1.0), r("Q9s", 0.95), r("Q8s", 0.85),
    r("QJo", 0.95), r("QTo", 0.80),
    r("JTs", 1.0), r("J9s", 0.95), r("J8s", 0.85),
    r("JTo", 0.90), r("J9o", 0.70),
    r("T9s", 1.0), r("T8s", 0.95), r("T7s", 0.85),
    r("98s", 0.95), r("97s", 0.85), r("87s", 0.95), r("76s", 0.95),
    r("65s", 0.95), r("54s", 0.95),
];

#[rustfmt::skip]
const NINE_MAX_SB: &[Entry] = &[
    r("AA", 1.0), r("KK", 1.0), r("QQ", 1.0), r("JJ", 1.0),
    r("TT", 1.0), r("99", 1.0), r("88", 0.95), r("77", 0.85),
    r("AKs", 1.0), r("AQs", 1.0), r("AJs", 1.0), r("ATs", 1.0),
    r("A9s", 0.90), r("A5s", 0.80),
    r("AKo", 1.0), r("AQo", 1.0), r("AJo", 0.95), r("ATo", 0.80),
    r("KQs", 1.0), r("KJs", 1.0), r("KTs", 1.0),
    r("QJs", 1.0), r("QTs", 1.0), r("JTs", 1.0), r("T9s", 0.95),
];

/// Raw table rows for a format and position.
pub fn table(format: TableFormat, position: Position) -> &'static [Entry] {
    match (format, position) {
        (TableFormat::SixMax, Position::UTG) => SIX_MAX_UTG,
        (TableFormat::SixMax, Position::CO) => SIX_MAX_CO,
        (TableFormat::SixMax, Position::BTN) => SIX_MAX_BTN,
        (TableFormat::SixMax, Position::SB) => SIX_MAX_SB,
        (TableFormat::NineMax, Position::UTG) => NINE_MAX_UTG,
        (TableFormat::NineMax, Position::CO) => NINE_MAX_CO,
        (TableFormat::NineMax, Position::BTN) => NINE_MAX_BTN,
        (TableFormat::NineMax, Position::SB) => NINE_MAX_SB,
        (_, Position::BB) => BB_DEFENSE,
    }
}

type TableIndex = FxHashMap<(TableFormat, Position), FxHashMap<&'static str, Entry>>;

static INDEX: Lazy<TableIndex> = Lazy::new(|| {
    let mut index = TableIndex::default();
    for format in TableFormat::ALL {
        for position in Position::ALL {
            let rows = table(format, position)
                .iter()
                .map(|entry| (entry.hand, *entry))
                .collect();
            index.insert((format, position), rows);
        }
    }
    index
});

/// Look up a hand; `None` when the table does not list it.
pub fn lookup(hand: &Hand, format: TableFormat, position: Position) -> Option<Entry> {
    INDEX
        .get(&(format, position))
        .and_then(|rows| rows.get(hand.label().as_str()))
        .copied()
}

/// Completed preflop distribution for a spot; unlisted hands fold.
pub fn preflop_strategy(hand: &Hand, position: Position, player_count: u8) -> Distribution {
    let format = TableFormat::for_players(player_count);
    match lookup(hand, format, position) {
        Some(entry) => entry.distribution(),
        None => Distribution::pure(Action::Fold),
    }
}

/// Preflop strategy plus a one-line explanation.
pub fn preflop_advice(hand: &Hand, position: Position, player_count: u8) -> Advice {
    let distribution = preflop_strategy(hand, position, player_count);
    let explanation = explain(hand, &distribution, position);
    Advice::new(distribution, explanation)
}

fn explain(hand: &Hand, distribution: &Distribution, position: Position) -> String {
    let primary = distribution.primary();
    let pct = (distribution.get(primary) * 100.0).round() as u32;
    match primary {
        Action::Raise => format!(
            "{} is strong from {}. Raise {}% to build the pot and apply pressure.",
            hand, position, pct
        ),
        Action::Call => format!(
            "From {}, {} plays well as a call {}% for pot control and implied odds.",
            position, hand, pct
        ),
        _ => format!(
            "{} lacks the equity to continue from {}. Fold {}% and wait for a better spot.",
            hand, position, pct
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn test_aces_on_button_raise() {
        let dist = preflop_strategy(&hand("AA"), Position::BTN, 6);
        assert_eq!(dist.get(Action::Raise), 1.0);
        assert_eq!(dist.get(Action::Fold), 0.0);
        assert_eq!(dist.primary(), Action::Raise);
    }

    #[test]
    fn test_unlisted_hand_folds() {
        let dist = preflop_strategy(&hand("72o"), Position::UTG, 6);
        assert_eq!(dist.get(Action::Fold), 1.0);
        assert_eq!(dist.len(), 1);

        let dist = preflop_strategy(&hand("72o"), Position::UTG, 9);
        assert_eq!(dist.get(Action::Fold), 1.0);
    }

    #[test]
    fn test_partial_frequency_folds_remainder() {
        let dist = preflop_strategy(&hand("77"), Position::UTG, 4);
        assert!((dist.get(Action::Raise) - 0.65).abs() < 1e-12);
        assert!((dist.get(Action::Fold) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_big_blind_mixes_calls_and_raises() {
        let dist = preflop_strategy(&hand("AKs"), Position::BB, 2);
        assert_eq!(dist.get(Action::Call), 0.75);
        assert_eq!(dist.get(Action::Raise), 0.25);
        assert_eq!(dist.primary(), Action::Call);
    }

    #[test]
    fn test_format_switch() {
        assert_eq!(TableFormat::for_players(2), TableFormat::SixMax);
        assert_eq!(TableFormat::for_players(6), TableFormat::SixMax);
        assert_eq!(TableFormat::for_players(7), TableFormat::NineMax);

        // 77 opens from UTG at six-handed tables only
        assert!(lookup(&hand("77"), TableFormat::SixMax, Position::UTG).is_some());
        assert!(lookup(&hand("77"), TableFormat::NineMax, Position::UTG).is_none());
    }

    #[test]
    fn test_every_table_entry_is_a_valid_distribution() {
        for format in TableFormat::ALL {
            for position in Position::ALL {
                for entry in table(format, position) {
                    let parsed: Hand = entry.hand.parse().unwrap();
                    assert_eq!(parsed.label(), entry.hand);
                    assert!(entry.call + entry.raise <= 1.0 + 1e-9);
                    assert!(entry.distribution().is_complete());
                }
            }
        }
    }

    #[test]
    fn test_every_hand_distribution_sums_to_one() {
        for players in [2, 9] {
            for position in Position::ALL {
                for h in Hand::all() {
                    assert!(preflop_strategy(&h, position, players).is_complete());
                }
            }
        }
    }

    #[test]
    fn test_explanations() {
        let advice = preflop_advice(&hand("AA"), Position::BTN, 6);
        assert!(advice.explanation.contains("Raise 100%"));

        let advice = preflop_advice(&hand("TT"), Position::BB, 6);
        assert!(advice.explanation.contains("call 95%"));

        let advice = preflop_advice(&hand("72o"), Position::UTG, 6);
        assert!(advice.explanation.starts_with("72o"));
        assert!(advice.explanation.contains("Fold 100%"));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("btn".parse::<Position>().unwrap(), Position::BTN);
        assert!("HJ".parse::<Position>().is_err());
        assert!(Position::CO.in_position());
        assert!(!Position::SB.in_position());
    }
}
