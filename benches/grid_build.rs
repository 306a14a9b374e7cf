use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridhop::core::{build_grid_layer, GameState, StatsTracker};
use gridhop::term::{GameView, Viewport};
use gridhop::types::GridSize;

fn bench_grid_build(c: &mut Criterion) {
    for n in 1..=4u32 {
        let size = GridSize::new(n).unwrap();
        c.bench_function(&format!("build_grid_layer_{}", n), |b| {
            b.iter(|| build_grid_layer(black_box(size)))
        });
    }
}

fn bench_stats_hit(c: &mut Criterion) {
    let mut stats = StatsTracker::new();
    let mut now = 0u64;

    c.bench_function("record_hop_x10_then_hit", |b| {
        b.iter(|| {
            for _ in 0..10 {
                stats.record_hop();
            }
            now += 250;
            stats.record_hit(black_box(now));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut gs = GameState::new(12345);
    gs.start(GridSize::new(2).unwrap());
    let view = GameView::default();
    let snap = gs.snapshot();

    c.bench_function("render_80x24_size2", |b| {
        b.iter(|| view.render(black_box(&snap), gs.grid(), Viewport::new(80, 24)))
    });
}

criterion_group!(benches, bench_grid_build, bench_stats_hit, bench_render);
criterion_main!(benches);
