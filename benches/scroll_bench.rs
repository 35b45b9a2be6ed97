use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segno::viewer::scroll::AutoScroll;

fn bench_engine_tick(c: &mut Criterion) {
    c.bench_function("autoscroll_tick", |b| {
        let mut engine = AutoScroll::new(180);
        engine.start();
        b.iter(|| black_box(engine.on_tick()));
    });

    c.bench_function("autoscroll_minute_at_min_tempo", |b| {
        b.iter(|| {
            let mut engine = AutoScroll::new(40);
            engine.start();
            let mut total = 0usize;
            // 6000 ticks = one minute of wall time at the 10ms period
            for _ in 0..6000 {
                total += engine.on_tick();
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_engine_tick);
criterion_main!(benches);
