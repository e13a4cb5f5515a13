use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mcubench_core::{count_solutions, run_points, Point};

fn bench_float(c: &mut Criterion) {
    c.bench_function("float_points_50", |b| {
        b.iter(|| {
            let p: Option<Point> = run_points(black_box(50));
            black_box(p)
        })
    });
}

fn bench_nqueens(c: &mut Criterion) {
    c.bench_function("nqueens_6", |b| {
        b.iter(|| {
            let total = count_solutions(black_box(6));
            assert_eq!(total, 4);
        })
    });
}

criterion_group!(benches, bench_float, bench_nqueens);
criterion_main!(benches);
