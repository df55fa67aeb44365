use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use pattern_sewing_editor::core::{
    begin_drag, generate_blocks, update_drag, SeamHysteresis,
};
use pattern_sewing_editor::{hit_test, load_document, Block, HitThreshold};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const FIXTURE: &str = include_str!("../tests/fixtures/blocks.json");

fn bench_document_loading(c: &mut Criterion) {
    c.bench_function("json_load_fixture", |b| {
        b.iter(|| {
            let (blocks, _) = load_document(black_box(FIXTURE)).expect("JSON load failed");
            black_box(blocks.len())
        })
    });
}

fn build_generated_blocks(count: usize) -> Vec<Block> {
    let (templates, _) = load_document(FIXTURE).expect("JSON load failed");
    let mut rng = StdRng::seed_from_u64(42);
    generate_blocks(&templates, count, 60.0, &mut rng).expect("Generierung fehlgeschlagen")
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 700) as f32 + 0.37;
            let y = ((i * 7) % 300) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let threshold = HitThreshold::default();
    let query_points = build_query_points(1024);

    for &block_count in &[10usize, 100, 1000] {
        let blocks = build_generated_blocks(block_count);

        group.bench_with_input(
            BenchmarkId::new("batch", block_count),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|p| !hit_test(black_box(**p), blocks, 1.0, &threshold).is_none())
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_sewing_drag(c: &mut Criterion) {
    let (mut blocks, _) = load_document(FIXTURE).expect("JSON load failed");
    let grab = blocks[0].sewing(2).expect("Sewing 2 erwartet").vertexes[0];
    let mut session =
        begin_drag(grab, &blocks[0], 2, SeamHysteresis::default()).expect("Drag erwartet");

    // Kreisbahn um das Quadrat, überquert die Naht bei (0, 0)
    let path: Vec<Vec2> = (0..256)
        .map(|i| {
            let angle = i as f32 / 256.0 * std::f32::consts::TAU;
            Vec2::new(5.0, 5.0) + Vec2::new(angle.cos(), angle.sin()) * 8.0
        })
        .collect();

    c.bench_function("sewing_drag_circle", |b| {
        b.iter(|| {
            let mut changed = 0usize;
            for point in &path {
                if update_drag(black_box(*point), &mut session, &mut blocks) {
                    changed += 1;
                }
            }
            black_box(changed)
        })
    });
}

fn bench_generation(c: &mut Criterion) {
    let (templates, _) = load_document(FIXTURE).expect("JSON load failed");
    let mut group = c.benchmark_group("generate_blocks");

    for &count in &[100usize, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                let blocks = generate_blocks(&templates, black_box(count), 60.0, &mut rng);
                black_box(blocks.map(|b| b.len()))
            })
        });
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_document_loading,
    bench_hit_test,
    bench_sewing_drag,
    bench_generation
);
criterion_main!(core_benches);
