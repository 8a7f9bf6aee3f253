use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use stockline_allocation::{Batch, OrderLine, allocate};

fn eta(offset: u64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.checked_add_days(Days::new(offset)))
}

/// Candidate set where only the latest shipment has room, so every
/// allocation scans the whole sorted sequence. That batch sits at index 0.
fn worst_case_batches(n: u64) -> Vec<Batch> {
    (0..n)
        .rev()
        .map(|i| {
            let qty = if i == n - 1 { u32::MAX } else { 0 };
            Batch::new(format!("batch-{i}"), "SPOON", qty, eta(i))
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for n in [10u64, 100, 1_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("worst_case", n), &n, |b, &n| {
            let mut batches = worst_case_batches(n);
            let line = match OrderLine::new("order-001", "SPOON", 1) {
                Ok(line) => line,
                Err(err) => panic!("{err}"),
            };
            b.iter(|| {
                let reference = allocate(black_box(&line), &mut batches);
                // Release again so every iteration sees the same state.
                batches[0].deallocate(&line);
                black_box(reference)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
