use criterion::{Criterion, criterion_group, criterion_main};

use tile_puzzle::{PuzzleGameState, PuzzleSettings, SessionRng};

fn shuffle_board(grid_size: usize) {
    let settings = PuzzleSettings {
        grid_size,
        max_moves: 500,
    };
    let mut game = PuzzleGameState::new(settings).expect("Supported settings");
    let mut rng = SessionRng::from_random();
    game.shuffle(&mut rng);
}

fn shuffle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    group.bench_function("3x3", |b| b.iter(|| shuffle_board(3)));
    group.bench_function("4x4", |b| b.iter(|| shuffle_board(4)));
    group.bench_function("5x5", |b| b.iter(|| shuffle_board(5)));

    group.finish();
}

criterion_group!(benches, shuffle_bench);
criterion_main!(benches);
