//! Benchmarks for the cabin engine hot paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cirrus_core::FlightTime;
use cirrus_engine::FlightController;
use cirrus_sim::{ChaosConfig, PerformanceScript, StreamChaos};
use cirrus_wire::FrameExtractor;

fn bench_extractor_clean_stream(c: &mut Criterion) {
    let stream: String = PerformanceScript::full_flight().lines().concat();

    c.bench_function("extractor_clean_stream", |b| {
        b.iter(|| {
            let mut extractor = FrameExtractor::new();
            let events = extractor.ingest(black_box(&stream));
            black_box(events)
        })
    });
}

fn bench_extractor_chaos_chunks(c: &mut Criterion) {
    let lines = PerformanceScript::full_flight().lines();
    let chunks = StreamChaos::new(ChaosConfig::heavy(), 7).chunks(&lines);

    c.bench_function("extractor_chaos_chunks", |b| {
        b.iter(|| {
            let mut extractor = FrameExtractor::new();
            let mut total = 0usize;
            for chunk in &chunks {
                total += extractor.ingest(black_box(chunk)).len();
            }
            black_box(total)
        })
    });
}

fn bench_controller_tick(c: &mut Criterion) {
    let mut controller = FlightController::with_seed(1);
    controller.ingest(
        "VISUAL:{\"time\":1,\"state\":\"Cadence Dominant\"}",
        FlightTime::ZERO,
    );

    let mut now = FlightTime::ZERO;
    c.bench_function("controller_tick", |b| {
        b.iter(|| {
            now = FlightTime::from_millis(now.as_millis() + 16);
            controller.tick(black_box(now));
        })
    });
}

criterion_group!(
    benches,
    bench_extractor_clean_stream,
    bench_extractor_chaos_chunks,
    bench_controller_tick
);
criterion_main!(benches);
