use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use suid::{SuidGenerator, SuidRegistry, SystemClock, TimeSource, decode};

#[derive(Clone)]
struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (split across threads for
// the contended benchmarks).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single generator on one thread.
fn bench_generator<T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> SuidGenerator<T>,
) where
    T: TimeSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one generator shared by several threads hammering the same
/// counter.
fn bench_generator_contended<T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> SuidGenerator<T>,
) where
    T: TimeSource + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);
    let max_threads = num_cpus::get().max(1);

    for thread_count in [1, 2, 4, 8, 16].into_iter().filter(|&n| n <= max_threads) {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_factory());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

/// Benchmarks threads each using their own discriminator from one registry.
/// Neighbouring counters share cache lines unless `cache-padded` is enabled.
fn bench_registry_spread(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    let max_threads = num_cpus::get().max(1);
    let registry = SuidRegistry::with_clock(FixedMockTime { millis: 1 << 40 });

    for thread_count in [1, 2, 4, 8, 16].into_iter().filter(|&n| n <= max_threads) {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let barrier = Barrier::new(thread_count + 1);
                    scope(|s| {
                        for instance_id in 0..thread_count {
                            let generator = &registry[instance_id as u8];
                            let barrier = &barrier;
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

// --- MOCK CLOCK (isolates the counter) ---

fn benchmark_mock_sequential(c: &mut Criterion) {
    bench_generator(c, "mock/sequential", || {
        SuidGenerator::new(0, FixedMockTime { millis: 1 << 40 })
    });
}

fn benchmark_mock_contended(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended", || {
        SuidGenerator::new(0, FixedMockTime { millis: 1 << 40 })
    });
}

fn benchmark_mock_registry_spread(c: &mut Criterion) {
    bench_registry_spread(c, "mock/registry_spread");
}

// --- SYSTEM CLOCK (includes the time syscall) ---

fn benchmark_system_sequential(c: &mut Criterion) {
    bench_generator(c, "system/sequential", || SuidGenerator::new(0, SystemClock));
}

fn benchmark_system_contended(c: &mut Criterion) {
    bench_generator_contended(c, "system/contended", || SuidGenerator::new(0, SystemClock));
}

fn benchmark_decode(c: &mut Criterion) {
    let id = SuidGenerator::new(0, SystemClock).next_id();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));
    group.bench_function("system_clock", |b| b.iter(|| decode(black_box(id))));
    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential,
    benchmark_mock_contended,
    benchmark_mock_registry_spread,
    // System clock
    benchmark_system_sequential,
    benchmark_system_contended,
    benchmark_decode,
);
criterion_main!(benches);
