//! Benchmarks for container operations.
//!
//! Compares nexus-containers against `Vec`, `VecDeque` and `LinkedList`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_containers::{List, Queue, Stack, Vector};
use std::collections::{LinkedList, VecDeque};

const SIZES: [usize; 3] = [64, 1024, 16384];

// ============================================================================
// Growth
// ============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut vector = Vector::new();
                for i in 0..size as u64 {
                    vector.push_back(black_box(i));
                }
                vector
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size as u64 {
                    vec.push(black_box(i));
                }
                vec
            });
        });

        group.bench_with_input(BenchmarkId::new("list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list: List<u64> = List::new();
                for i in 0..size as u64 {
                    list.push_back(black_box(i));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size as u64 {
                    list.push_back(black_box(i));
                }
                list
            });
        });
    }

    group.finish();
}

// ============================================================================
// Steady state (preallocated, push then pop)
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("vector", |b| {
        let mut vector = Vector::with_capacity(1024);
        b.iter(|| {
            vector.push_back(black_box(42u64));
            black_box(vector.pop_back())
        });
    });

    group.bench_function("std_vec", |b| {
        let mut vec = Vec::with_capacity(1024);
        b.iter(|| {
            vec.push(black_box(42u64));
            black_box(vec.pop())
        });
    });

    group.bench_function("stack", |b| {
        let mut stack: Stack<u64> = Stack::with_capacity(1024);
        b.iter(|| {
            stack.push(black_box(42));
            black_box(stack.pop())
        });
    });

    group.bench_function("queue", |b| {
        let mut queue: Queue<u64> = Queue::with_capacity(1024);
        b.iter(|| {
            queue.join(black_box(42));
            black_box(queue.fetch_head())
        });
    });

    group.bench_function("std_vec_deque", |b| {
        let mut deque = VecDeque::with_capacity(1024);
        b.iter(|| {
            deque.push_back(black_box(42u64));
            black_box(deque.pop_front())
        });
    });

    group.bench_function("std_linked_list", |b| {
        let mut list = LinkedList::new();
        b.iter(|| {
            list.push_back(black_box(42u64));
            black_box(list.pop_front())
        });
    });

    group.finish();
}

// ============================================================================
// Indexed access and search
// ============================================================================

fn bench_get_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_middle");

    for size in SIZES {
        let mid = size / 2;

        let vector: Vector<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("vector", size), &mid, |b, &mid| {
            b.iter(|| black_box(vector.get(black_box(mid)).ok()));
        });

        let list: List<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("list", size), &mid, |b, &mid| {
            b.iter(|| black_box(list.get(black_box(mid)).ok()));
        });

        let deque: VecDeque<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("std_vec_deque", size), &mid, |b, &mid| {
            b.iter(|| black_box(deque.get(black_box(mid))));
        });
    }

    group.finish();
}

fn bench_index_of_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_of_last");

    for size in SIZES {
        let needle = size as u64 - 1;

        let vector: Vector<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("vector", size), &needle, |b, needle| {
            b.iter(|| black_box(vector.index_of(black_box(needle))));
        });

        let list: List<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("list", size), &needle, |b, needle| {
            b.iter(|| black_box(list.index_of(black_box(needle))));
        });

        let linked: LinkedList<u64> = (0..size as u64).collect();
        group.bench_with_input(
            BenchmarkId::new("std_linked_list", size),
            &needle,
            |b, needle| {
                b.iter(|| black_box(linked.iter().position(|v| v == black_box(needle))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Copy
// ============================================================================

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    let size = 1024usize;
    group.throughput(Throughput::Elements(size as u64));

    let vector: Vector<u64> = (0..size as u64).collect();
    group.bench_function("vector", |b| b.iter(|| black_box(vector.clone())));

    let mut target: Vector<u64> = Vector::with_capacity(size * 2);
    group.bench_function("vector_clone_from", |b| {
        b.iter(|| {
            target.clone_from(black_box(&vector));
        })
    });

    let vec: Vec<u64> = (0..size as u64).collect();
    group.bench_function("std_vec", |b| b.iter(|| black_box(vec.clone())));

    let list: List<u64> = (0..size as u64).collect();
    group.bench_function("list", |b| b.iter(|| black_box(list.clone())));

    let linked: LinkedList<u64> = (0..size as u64).collect();
    group.bench_function("std_linked_list", |b| b.iter(|| black_box(linked.clone())));

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_pop,
    bench_get_middle,
    bench_index_of_last,
    bench_clone
);
criterion_main!(benches);
