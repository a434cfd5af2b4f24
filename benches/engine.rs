use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{collides, shape_of, Grid};
use blockfall::{GameLoop, GameSession, PieceKind, SessionConfig, UniformSource};

fn new_session(seed: u32) -> GameSession {
    GameSession::new(
        SessionConfig::default(),
        Box::new(UniformSource::new(seed)),
    )
    .expect("default config is valid")
}

fn bench_advance(c: &mut Criterion) {
    let mut game = GameLoop::new(
        SessionConfig::default(),
        Box::new(UniformSource::new(12345)),
    )
    .expect("default config is valid");
    game.start();

    c.bench_function("loop_advance_16ms", |b| {
        b.iter(|| {
            game.advance(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_full_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(8, 20).expect("valid dimensions");
            for y in 16..20 {
                for x in 0..8 {
                    grid.set(x, y, 1);
                }
            }
            grid.sweep_full_rows()
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let grid = Grid::new(8, 20).expect("valid dimensions");
    let shape = shape_of(PieceKind::T);

    c.bench_function("collides_free_placement", |b| {
        b.iter(|| collides(black_box(&grid), black_box(&shape), 2, 5))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = new_session(12345);
    session.start();

    c.bench_function("spawn_next", |b| {
        b.iter(|| {
            session.spawn_next();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = new_session(12345);
    session.start();
    let mut direction = 1i8;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !session.move_piece(direction) {
                direction = -direction;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = new_session(12345);
    session.start();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            session.rotate_piece();
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_sweep,
    bench_collides,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
