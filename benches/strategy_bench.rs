//! Benchmarks for the strategy functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gto_trainer::cards::{Board, Hand};
use gto_trainer::strategy::{flop_advice, preflop_advice, river_advice, turn_advice, Position};
use gto_trainer::trainer::{GameMode, Session, TrainerConfig};

fn preflop_benchmark(c: &mut Criterion) {
    let hands: Vec<Hand> = Hand::all().collect();

    c.bench_function("preflop_all_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(preflop_advice(hand, Position::CO, 6));
            }
        })
    });
}

fn postflop_benchmark(c: &mut Criterion) {
    let hand: Hand = "AKs".parse().unwrap();
    let board: Board = "Qh7h2cJd4s".parse().unwrap();
    let cards = board.cards();

    c.bench_function("flop_advice", |b| {
        b.iter(|| flop_advice(black_box(&hand), black_box(&cards[..3]), Position::BTN))
    });
    c.bench_function("turn_advice", |b| {
        b.iter(|| turn_advice(black_box(&hand), black_box(&cards[..4]), Position::BTN, 3))
    });
    c.bench_function("river_advice", |b| {
        b.iter(|| river_advice(black_box(&hand), black_box(cards), Position::SB))
    });
}

fn session_benchmark(c: &mut Criterion) {
    let config = TrainerConfig::new()
        .with_game_mode(GameMode::TurnRiver)
        .with_seed(42);
    let mut session = Session::new(config).unwrap();

    c.bench_function("session_full_hand", |b| {
        b.iter(|| {
            session.new_hand();
            while session.can_advance() {
                session.advance_street().unwrap();
                black_box(session.advice());
            }
        })
    });
}

criterion_group!(benches, preflop_benchmark, postflop_benchmark, session_benchmark);
criterion_main!(benches);
