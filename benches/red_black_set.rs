use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use red_black_set::RedBlackSet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let keys = keys();
    let set: BTreeSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_red_black_set_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench red_black_set insert", move |b| {
        b.iter(|| {
            let mut set = RedBlackSet::new();
            for key in &keys {
                set.insert(*key);
            }
            set
        })
    });
}

fn bench_red_black_set_contains(c: &mut Criterion) {
    let keys = keys();
    let set: RedBlackSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench red_black_set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_red_black_set_remove(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench red_black_set remove", move |b| {
        b.iter(|| {
            let mut set: RedBlackSet<u32> = keys.iter().cloned().collect();
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_red_black_set_cursor(c: &mut Criterion) {
    let set: RedBlackSet<u32> = keys().into_iter().collect();
    c.bench_function("bench red_black_set cursor", move |b| {
        b.iter(|| {
            let mut cursor = set.begin();
            while let Some(key) = cursor.value() {
                black_box(key);
                cursor.move_next();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_red_black_set_insert,
    bench_red_black_set_contains,
    bench_red_black_set_remove,
    bench_red_black_set_cursor,
);
criterion_main!(benches);
