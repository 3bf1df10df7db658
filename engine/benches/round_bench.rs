use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use snake_engine::game::Round;
use snake_engine::settings::GameSettings;
use snake_engine::snake::{Direction, Grid, Position, Snake};
use snake_engine::GameRng;

const MAX_MOVES: usize = 2000;

fn large_settings() -> GameSettings {
    let mut settings = GameSettings::default();
    settings.grid.rows = 32;
    settings.grid.cols = 32;
    settings.snake.start_row = 16;
    settings.snake.start_col = 8;
    settings.snake.length = 8;
    settings
}

fn bench_free_positions_half_full() {
    let mut grid = Grid::new(32, 32);
    let mut snake = Snake::new(&mut grid, Position::new(0, 31), Direction::East, 32).unwrap();
    for row in 1..16 {
        snake.steer(Direction::South);
        snake.advance(&mut grid).unwrap();
        snake.grow(&mut grid).unwrap();
        let heading = if row % 2 == 0 { Direction::East } else { Direction::West };
        snake.steer(heading);
        for _ in 0..31 {
            snake.advance(&mut grid).unwrap();
            snake.grow(&mut grid).unwrap();
        }
    }
    let free = grid.free_positions();
    assert!(!free.is_empty());
}

/// Sweeps the board row by row until the snake bites itself.
fn bench_scripted_round(seed: u64) {
    let settings = large_settings();
    let mut rng = GameRng::new(seed);
    let mut round = Round::new(&settings, &mut rng).unwrap();

    for step in 0..MAX_MOVES {
        let heading = if step % 32 == 31 { Direction::South } else { Direction::East };
        round.snake.steer(heading);
        let report = round.advance(&mut rng).unwrap();
        if report.outcome.is_some() {
            break;
        }
    }
}

fn round_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("free_positions_half_full", |b| {
        b.iter(bench_free_positions_half_full)
    });

    group.bench_function("scripted_round", |b| {
        b.iter(|| bench_scripted_round(42))
    });

    group.finish();
}

criterion_group!(benches, round_bench);
criterion_main!(benches);
