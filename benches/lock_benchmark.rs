/*!
 * Lock Contention Benchmarks
 *
 * Compare acquire/release cost of the spinlock variants, uncontended and
 * under a fixed-work contended sweep
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lockbench::{run_fixed, BenchLock, LockKind, RawLock, SharedCounter};
use std::thread;

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended_lock_unlock");

    for kind in LockKind::ALL {
        let lock = BenchLock::new(kind);

        group.bench_with_input(
            BenchmarkId::from_parameter(kind.label()),
            &lock,
            |b, lock| {
                b.iter(|| {
                    lock.lock();
                    black_box(());
                    lock.unlock();
                });
            },
        );
    }

    group.finish();
}

fn bench_contended_increments(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_increments");

    for kind in LockKind::ALL {
        for threads in [1usize, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(kind.label(), threads),
                &threads,
                |b, &threads| {
                    let lock = BenchLock::new(kind);

                    b.iter(|| {
                        let mut counter = SharedCounter::new();
                        thread::scope(|s| {
                            for _ in 0..threads {
                                s.spawn(|| run_fixed(&lock, &counter, 1_000));
                            }
                        });
                        black_box(counter.value())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_contended_increments);
criterion_main!(benches);
