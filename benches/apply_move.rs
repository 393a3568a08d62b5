//! Reducer throughput.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bluff_engine::cards::deal_cards;
use bluff_engine::core::{GameRng, GameState, Move, PlayerId, Rank, Rules};
use bluff_engine::rules::apply_move;

fn dealt(players: usize) -> GameState {
    let ids: Vec<PlayerId> = (0..players).map(|i| PlayerId::new(format!("p{}", i))).collect();
    deal_cards(&ids, Rules::new(true), &mut GameRng::new(42))
}

fn single_card_play(state: &GameState) -> Move {
    let declared = state.expected_rank.unwrap_or(Rank::FIRST);
    Move::play(&[state.current_player().hand[0]], declared)
}

fn bench_deal(c: &mut Criterion) {
    let ids: Vec<PlayerId> = (0..4).map(|i| PlayerId::new(format!("p{}", i))).collect();
    let mut rng = GameRng::new(1);
    c.bench_function("deal_cards/4", |b| {
        b.iter(|| deal_cards(black_box(&ids), Rules::default(), &mut rng))
    });
}

fn bench_play(c: &mut Criterion) {
    let state = dealt(4);
    let mv = single_card_play(&state);
    c.bench_function("apply_move/play", |b| {
        b.iter(|| apply_move(black_box(&state), black_box(&mv)))
    });
}

fn bench_call_bluff(c: &mut Criterion) {
    // Build up a pile before challenging it
    let mut state = dealt(4);
    for _ in 0..20 {
        let mv = single_card_play(&state);
        state = apply_move(&state, &mv).0;
    }
    c.bench_function("apply_move/call_bluff", |b| {
        b.iter(|| apply_move(black_box(&state), black_box(&Move::CallBluff)))
    });
}

criterion_group!(benches, bench_deal, bench_play, bench_call_bluff);
criterion_main!(benches);
