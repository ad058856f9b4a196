//! Performance benchmarks for lifegrid

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifegrid::{pattern, Symbols, World};

const GLIDER: &str = "\
.X......\n\
..X.....\n\
XXX.....\n\
........\n\
........\n\
........\n\
........\n\
........\n";

fn benchmark_advance(c: &mut Criterion) {
    let mut world = World::new_with_seed(42);
    world.initialize_random();

    // Warm up
    world.run(10);

    c.bench_function("world_advance", |b| {
        b.iter(|| {
            world.advance();
        });
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let symbols = Symbols::default();

    c.bench_function("pattern_parse", |b| {
        b.iter(|| pattern::parse(black_box(GLIDER.as_bytes()), symbols));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let symbols = Symbols::default();
    let grid = pattern::parse(GLIDER.as_bytes(), symbols).unwrap();

    c.bench_function("pattern_render", |b| {
        b.iter(|| pattern::render_to_string(black_box(&grid), symbols));
    });
}

criterion_group!(benches, benchmark_advance, benchmark_parse, benchmark_render);
criterion_main!(benches);
