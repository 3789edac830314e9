use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{
    collides, rotate, sweep, template, GameSnapshot, Grid, Offset, SimConfig, Simulation,
};
use blockfall::types::{PieceKind, RotateDir, SimStatus};

fn bench_tick(c: &mut Criterion) {
    let mut sim = Simulation::new(SimConfig {
        seed: Some(12345),
        ..SimConfig::default()
    });
    sim.start();

    c.bench_function("tick", |b| {
        b.iter(|| {
            if sim.tick().is_err() || sim.status() != SimStatus::Running {
                sim.restart();
                sim.start();
            }
        })
    });
}

fn bench_advance_16ms(c: &mut Criterion) {
    let mut sim = Simulation::new(SimConfig::default());
    sim.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            let _ = sim.advance(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let full = Grid::from_rows(&[
        "1.........",
        "2222222222",
        "3333333333",
        "4444444444",
        "5555555555",
    ]);

    c.bench_function("sweep_4_lines", |b| {
        b.iter(|| {
            let mut grid = full.clone();
            black_box(sweep(&mut grid).ok());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shapes: Vec<_> = PieceKind::ALL.iter().map(|&k| template(k)).collect();

    c.bench_function("rotate_all_kinds", |b| {
        b.iter(|| {
            for shape in &shapes {
                black_box(rotate(black_box(shape), RotateDir::Cw));
            }
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let grid = Grid::from_rows(&["1111....11", "11.1111111"]);
    let i = template(PieceKind::I);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(collides(&grid, &i, black_box(Offset::new(18, 4)))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut sim = Simulation::new(SimConfig::default());
    sim.start();
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            sim.snapshot_into(&mut snapshot);
            black_box(&snapshot);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_advance_16ms,
    bench_sweep,
    bench_rotate,
    bench_collides,
    bench_snapshot
);
criterion_main!(benches);
