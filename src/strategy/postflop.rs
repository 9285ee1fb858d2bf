//! Flop, turn and river heuristics.
//!
//! Each street walks a fixed cascade from the strongest made hands down to air
//! and returns a bet/check/fold mix. Position shifts every mix toward betting
//! in position; wet boards push made hands and strong draws to bet more.

use super::action::Action;
use super::distribution::{Advice, Distribution};
use super::preflop::Position;
use crate::analysis::{Draws, PairTier, Pairing, Texture};
use crate::cards::{Card, Hand};

/// Betting scale on the turn for a given number of players at the table.
pub fn turn_factor(player_count: u8) -> f64 {
    match player_count {
        0..=2 => 1.0,
        3 => 0.85,
        _ => 0.70,
    }
}

/// Flop recommendation. Also used as the base of the turn.
pub fn flop_advice(hand: &Hand, board: &[Card], position: Position) -> Advice {
    let tex = Texture::analyze(board);
    let pairing = Pairing::classify(hand, board);
    let draws = Draws::classify(hand, board, &tex);

    let ip = position.in_position();
    let wet = tex.is_wet();
    let pick = |in_pos: f64, out_of_pos: f64| if ip { in_pos } else { out_of_pos };
    let board_desc = tex.label().to_lowercase();

    if pairing.is_monster() {
        return Advice::new(
            Distribution::postflop(pick(0.85, 0.75), pick(0.15, 0.20), 0.0),
            format!(
                "You flopped a strong hand ({}) on a {} board. Favor betting for value.",
                pairing.describe(),
                board_desc
            ),
        );
    }

    if pairing.overpair {
        let (bet, check) = if wet {
            (pick(0.75, 0.65), pick(0.25, 0.30))
        } else {
            (pick(0.65, 0.55), pick(0.35, 0.40))
        };
        return Advice::new(
            Distribution::postflop(bet, check, 0.0),
            format!(
                "Overpair on a {} board. Lean toward betting for value and protection.",
                board_desc
            ),
        );
    }

    match pairing.tier {
        PairTier::Top => {
            let (bet, check) = if wet {
                (pick(0.70, 0.55), pick(0.30, 0.40))
            } else {
                (pick(0.60, 0.45), pick(0.40, 0.50))
            };
            return Advice::new(
                Distribution::postflop(bet, check, 0.0),
                format!(
                    "Top pair on a {} board. Bet more on wetter boards and mix in checks.",
                    board_desc
                ),
            );
        }
        PairTier::Middle => {
            return Advice::new(
                Distribution::postflop(pick(0.45, 0.35), pick(0.50, 0.55), pick(0.05, 0.10)),
                format!(
                    "Middle pair on a {} board. Prefer checking and bet some for protection.",
                    board_desc
                ),
            );
        }
        PairTier::Bottom => {
            return Advice::new(
                Distribution::postflop(pick(0.30, 0.20), pick(0.60, 0.65), pick(0.10, 0.15)),
                format!(
                    "Bottom pair on a {} board. Mostly check; mix small bets in position.",
                    board_desc
                ),
            );
        }
        PairTier::None => {}
    }

    if draws.is_strong() {
        let (bet, check) = if wet {
            (pick(0.65, 0.55), pick(0.30, 0.35))
        } else {
            (pick(0.60, 0.50), pick(0.35, 0.40))
        };
        let draw = if draws.flush_draw { "flush draw" } else { "open-ended straight draw" };
        return Advice::new(
            Distribution::postflop(bet, check, pick(0.05, 0.10)),
            format!(
                "Strong draw ({}) on a {} board. Favor betting as a semi-bluff.",
                draw, board_desc
            ),
        );
    }

    if draws.is_speculative() {
        return Advice::new(
            Distribution::postflop(pick(0.40, 0.25), pick(0.55, 0.65), pick(0.05, 0.10)),
            format!(
                "Speculative equity (gutshot, backdoor draw or overcards) on a {} board. \
                 Mix stab bets in position; mostly check out of position.",
                board_desc
            ),
        );
    }

    let dry = tex.is_rainbow() && !tex.connected;
    let (bet, check) = match (ip, dry) {
        (true, true) => (0.35, 0.60),
        (true, false) => (0.30, 0.65),
        (false, _) => (0.15, 0.80),
    };
    let plan = if ip {
        "Use small c-bets on drier boards"
    } else {
        "Mostly check-fold out of position"
    };
    Advice::new(
        Distribution::postflop(bet, check, 0.05),
        format!("Missed the board. {} to avoid bloating the pot.", plan),
    )
}

/// Turn recommendation: the flop cascade on four cards, with betting scaled
/// down as more players stay in.
pub fn turn_advice(hand: &Hand, board: &[Card], position: Position, player_count: u8) -> Advice {
    let base = flop_advice(hand, board, position);
    let factor = turn_factor(player_count);

    let base_bet = base.distribution.get(Action::Bet);
    let base_check = base.distribution.get(Action::Check);
    let bet = round2(base_bet * factor);
    let check = round2(base_check + (1.0 - factor) * base_bet * 0.5);

    Advice::new(
        Distribution::postflop(bet, check, 0.0),
        format!("[Turn] {}", base.explanation),
    )
}

/// River recommendation with its own cascade: draws have either got there or
/// missed, so unimproved draws turn into bluffs or folds.
pub fn river_advice(hand: &Hand, board: &[Card], position: Position) -> Advice {
    let tex = Texture::analyze(board);
    let pairing = Pairing::classify(hand, board);
    let draws = Draws::classify(hand, board, &tex);
    let ip = position.in_position();
    let pick = |in_pos: f64, out_of_pos: f64| if ip { in_pos } else { out_of_pos };

    if pairing.is_monster() {
        return Advice::new(
            Distribution::postflop(pick(0.80, 0.70), pick(0.20, 0.30), 0.0),
            format!("Strong value ({}) on the river. Bet for value.", pairing.describe()),
        );
    }

    if pairing.tier == PairTier::Top || pairing.overpair {
        return Advice::new(
            Distribution::postflop(pick(0.55, 0.45), pick(0.40, 0.50), 0.05),
            "Top pair or overpair on the river. Mix bets and checks depending on texture.",
        );
    }

    if draws.any_draw() {
        return Advice::new(
            Distribution::postflop(pick(0.25, 0.15), pick(0.45, 0.50), pick(0.30, 0.35)),
            "Missed draw. Consider bluffing in position; mostly check or fold out of position.",
        );
    }

    Advice::new(
        Distribution::postflop(0.0, pick(0.45, 0.30), pick(0.55, 0.70)),
        "Weak or no showdown value. Mostly check and fold.",
    )
}

/// Round half up to two decimals on the exact binary value of `x`.
///
/// `x * 100.0` can itself round up to a half (0.85 * 0.7 becomes 59.5), so
/// the remainder is taken with a fused multiply-add instead.
fn round2(x: f64) -> f64 {
    let mut cents = (x * 100.0).floor();
    let mut rest = x.mul_add(100.0, -cents);
    if rest < 0.0 {
        cents -= 1.0;
        rest += 1.0;
    }
    if rest >= 0.5 {
        cents += 1.0;
    }
    cents / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;

    fn spot(hand: &str, board: &str) -> (Hand, Board) {
        (hand.parse().unwrap(), board.parse().unwrap())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_flop_set_bets_for_value() {
        let (hand, board) = spot("77", "7s4d2c");
        let ip = flop_advice(&hand, board.cards(), Position::BTN);
        assert_close(ip.distribution.get(Action::Bet), 0.85);
        assert_close(ip.distribution.get(Action::Check), 0.15);
        assert_close(ip.distribution.get(Action::Fold), 0.0);
        assert!(ip.explanation.contains("set"));

        let oop = flop_advice(&hand, board.cards(), Position::SB);
        assert_close(oop.distribution.get(Action::Bet), 0.75);
        // Missing mass goes to fold
        assert_close(oop.distribution.get(Action::Fold), 0.05);
    }

    #[test]
    fn test_flop_overpair_depends_on_wetness() {
        let (hand, dry) = spot("QQ", "Js6d2c");
        let advice = flop_advice(&hand, dry.cards(), Position::CO);
        assert_close(advice.distribution.get(Action::Bet), 0.65);

        let (_, wet) = spot("QQ", "Jh9h2c");
        let advice = flop_advice(&hand, wet.cards(), Position::CO);
        assert_close(advice.distribution.get(Action::Bet), 0.75);
    }

    #[test]
    fn test_flop_pair_tiers() {
        let (hand, board) = spot("A8o", "Jd8s3c");
        let advice = flop_advice(&hand, board.cards(), Position::UTG);
        assert_close(advice.distribution.get(Action::Bet), 0.35);
        assert_close(advice.distribution.get(Action::Fold), 0.10);
        assert!(advice.explanation.starts_with("Middle pair"));

        let (hand, board) = spot("A3o", "Jd8s3c");
        let advice = flop_advice(&hand, board.cards(), Position::BTN);
        assert_close(advice.distribution.get(Action::Check), 0.60);
    }

    #[test]
    fn test_flop_draws_and_air() {
        let (hand, board) = spot("AKs", "Qh7h2c");
        let advice = flop_advice(&hand, board.cards(), Position::BTN);
        assert!(advice.explanation.contains("flush draw"));
        assert_close(advice.distribution.get(Action::Bet), 0.65);

        // Overcards only
        let (hand, board) = spot("AKo", "9d6s2c");
        let advice = flop_advice(&hand, board.cards(), Position::BB);
        assert_close(advice.distribution.get(Action::Bet), 0.25);

        // Nothing at all out of position
        let (hand, board) = spot("32o", "Kd9s6c");
        let advice = flop_advice(&hand, board.cards(), Position::UTG);
        assert_close(advice.distribution.get(Action::Check), 0.80);
        assert_eq!(advice.primary(), Action::Check);
    }

    #[test]
    fn test_turn_scales_with_player_count() {
        let (hand, board) = spot("77", "7s4d2cKh");

        let heads_up = turn_advice(&hand, board.cards(), Position::BTN, 2);
        assert_close(heads_up.distribution.get(Action::Bet), 0.85);
        assert_close(heads_up.distribution.get(Action::Check), 0.15);
        assert!(heads_up.explanation.starts_with("[Turn] "));

        let three_way = turn_advice(&hand, board.cards(), Position::BTN, 3);
        assert_close(three_way.distribution.get(Action::Bet), 0.72);
        assert_close(three_way.distribution.get(Action::Check), 0.21);
        assert_close(three_way.distribution.get(Action::Fold), 0.07);
        assert!(three_way.distribution.is_complete());
    }

    #[test]
    fn test_turn_rounds_on_exact_value() {
        // 0.85 * 0.7 is stored just below 0.595
        let (hand, board) = spot("77", "7s4d2cKh");
        let crowded = turn_advice(&hand, board.cards(), Position::BTN, 4);
        assert_close(crowded.distribution.get(Action::Bet), 0.59);
        assert_close(crowded.distribution.get(Action::Check), 0.28);
        assert_close(crowded.distribution.get(Action::Fold), 0.13);

        // Overcards out of position: 0.25 * 0.7 is stored just below 0.175
        let (hand, board) = spot("AKo", "9d6s2c3h");
        let advice = turn_advice(&hand, board.cards(), Position::BB, 4);
        assert_close(advice.distribution.get(Action::Bet), 0.17);
    }

    #[test]
    fn test_round2() {
        assert_close(round2(0.85 * 0.7), 0.59);
        assert_close(round2(0.70 * 0.85), 0.59);
        assert_close(round2(0.15 * 0.7), 0.10);
        assert_close(round2(0.85 * 0.85), 0.72);
        assert_close(round2(0.50 * 0.85), 0.42);
        assert_close(round2(0.6), 0.60);
        assert_close(round2(0.125), 0.13);
        assert_close(round2(0.0), 0.0);
    }

    #[test]
    fn test_turn_four_suit_board_is_air() {
        let (hand, board) = spot("43s", "KdQs8c8h");
        let advice = turn_advice(&hand, board.cards(), Position::BTN, 2);
        assert_close(advice.distribution.get(Action::Bet), 0.30);
        assert_close(advice.distribution.get(Action::Check), 0.65);
        assert_close(advice.distribution.get(Action::Fold), 0.05);
        assert!(advice.explanation.starts_with("[Turn] Missed the board"));
    }

    #[test]
    fn test_turn_connectivity_uses_top_three_values() {
        // The deuce does not break 9-8-6, so 54 is open-ended
        let (hand, board) = spot("54o", "9s8d6c2h");
        let advice = turn_advice(&hand, board.cards(), Position::BTN, 2);
        assert_close(advice.distribution.get(Action::Bet), 0.65);
        assert_close(advice.distribution.get(Action::Check), 0.30);
        assert!(advice.explanation.contains("open-ended straight draw"));
    }

    #[test]
    fn test_strong_draw_dry_and_out_of_position() {
        // Three suits on the turn with two hearts: flush draw on a dry board
        let (hand, board) = spot("65s", "Kh9h2c3d");
        let ip = turn_advice(&hand, board.cards(), Position::BTN, 2);
        assert_close(ip.distribution.get(Action::Bet), 0.60);
        assert_close(ip.distribution.get(Action::Check), 0.35);
        assert_close(ip.distribution.get(Action::Fold), 0.05);
        assert!(ip.explanation.contains("flush draw"));

        let oop = turn_advice(&hand, board.cards(), Position::SB, 2);
        assert_close(oop.distribution.get(Action::Bet), 0.50);
        assert_close(oop.distribution.get(Action::Check), 0.40);
        assert_close(oop.distribution.get(Action::Fold), 0.10);

        let (hand, wet) = spot("AKs", "Qh7h2c");
        let oop = flop_advice(&hand, wet.cards(), Position::SB);
        assert_close(oop.distribution.get(Action::Bet), 0.55);
        assert_close(oop.distribution.get(Action::Check), 0.35);
        assert_close(oop.distribution.get(Action::Fold), 0.10);
    }

    #[test]
    fn test_flop_air_in_position_prefers_dry_boards() {
        let (hand, dry) = spot("32o", "Kd9s5c");
        let advice = flop_advice(&hand, dry.cards(), Position::BTN);
        assert_close(advice.distribution.get(Action::Bet), 0.35);
        assert_close(advice.distribution.get(Action::Check), 0.60);
        assert_close(advice.distribution.get(Action::Fold), 0.05);

        let (hand, two_tone) = spot("32o", "Kd9d5c");
        let advice = flop_advice(&hand, two_tone.cards(), Position::BTN);
        assert_close(advice.distribution.get(Action::Bet), 0.30);
        assert_close(advice.distribution.get(Action::Check), 0.65);
        assert_close(advice.distribution.get(Action::Fold), 0.05);
    }

    #[test]
    fn test_river_missed_draw() {
        // T9 had a gutshot to 8-7 that never filled
        let (hand, board) = spot("T9o", "8d7s2cKhAs");
        let ip = river_advice(&hand, board.cards(), Position::BTN);
        assert_close(ip.distribution.get(Action::Bet), 0.25);
        assert_close(ip.distribution.get(Action::Check), 0.45);
        assert_close(ip.distribution.get(Action::Fold), 0.30);
        assert!(ip.explanation.starts_with("Missed draw"));

        let oop = river_advice(&hand, board.cards(), Position::SB);
        assert_close(oop.distribution.get(Action::Bet), 0.15);
        assert_close(oop.distribution.get(Action::Check), 0.50);
        assert_close(oop.distribution.get(Action::Fold), 0.35);
    }

    #[test]
    fn test_river_cascade() {
        let (hand, board) = spot("77", "7s4d2cKhQd");
        let advice = river_advice(&hand, board.cards(), Position::BTN);
        assert_close(advice.distribution.get(Action::Bet), 0.80);

        let (hand, board) = spot("AKo", "Ks9d4c2h2s");
        let advice = river_advice(&hand, board.cards(), Position::SB);
        assert_close(advice.distribution.get(Action::Bet), 0.45);
        assert_close(advice.distribution.get(Action::Fold), 0.05);

        let (hand, board) = spot("32o", "AdKs9c8h4s");
        let advice = river_advice(&hand, board.cards(), Position::UTG);
        assert_close(advice.distribution.get(Action::Bet), 0.0);
        assert_close(advice.distribution.get(Action::Fold), 0.70);
        assert_eq!(advice.primary(), Action::Fold);
    }
}
