use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vellum_diff::{diff_hunks, Config};

/// Builds a pair of synthetic texts with `lines` lines each, `change_every`
/// lines mutated so the patience engine sees a steady trickle of changes
/// rather than either a single hunk or total noise.
fn synthetic_texts(lines: usize, change_every: usize) -> (String, String) {
    let mut old = String::new();
    let mut new = String::new();
    for i in 0..lines {
        old.push_str(&format!("line {i} carries some representative content\n"));
        if change_every > 0 && i % change_every == 0 {
            new.push_str(&format!("line {i} carries some DIFFERENT representative content\n"));
        } else {
            new.push_str(&format!("line {i} carries some representative content\n"));
        }
    }
    (old, new)
}

fn bench_diff_hunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_hunks");
    let config = Config::default();

    for &lines in &[100usize, 1_000, 10_000] {
        let (old, new) = synthetic_texts(lines, 17);
        group.bench_with_input(BenchmarkId::new("scattered_changes", lines), &lines, |b, _| {
            b.iter(|| diff_hunks(black_box(&old), black_box(&new), black_box(&config)).unwrap());
        });
    }

    for &lines in &[100usize, 1_000, 10_000] {
        let (old, new) = synthetic_texts(lines, 0);
        group.bench_with_input(BenchmarkId::new("identical", lines), &lines, |b, _| {
            b.iter(|| diff_hunks(black_box(&old), black_box(&new), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_diff_hunks);
criterion_main!(benches);
