use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::types::{Cell, GameAction};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    // Keep the food off the path so ticks stay on the no-growth path.
    state.set_food(Cell::new(0, 0));

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.tick() {
                state.apply_action(GameAction::Restart);
                state.set_food(black_box(Cell::new(0, 0)));
            }
        })
    });
}

fn bench_eat_and_respawn_food(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("eat_and_respawn_food", |b| {
        b.iter(|| {
            let head = state.head();
            state.set_food(head.offset(1, 0));
            if !state.tick() {
                state.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("restart", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Restart));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_eat_and_respawn_food,
    bench_restart,
    bench_snapshot_into
);
criterion_main!(benches);
