use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;

use branchdb::BTree;

fn shuffled_keys(n: i64) -> Vec<i64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let mut keys: Vec<i64> = (0..n).collect();
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert(c: &mut Criterion) {
    for n in [1_000i64, 10_000] {
        c.bench_function(&format!("sequential_insert_{n}"), |b| {
            b.iter(|| {
                let mut tree = BTree::new(8).unwrap();
                for i in 0..n {
                    tree.insert(i, i);
                }
                tree
            });
        });

        let keys = shuffled_keys(n);
        c.bench_function(&format!("random_insert_{n}"), |b| {
            b.iter(|| {
                let mut tree = BTree::new(8).unwrap();
                for &key in &keys {
                    tree.insert(key, key);
                }
                tree
            });
        });
    }
}

fn bench_search(c: &mut Criterion) {
    let n = 10_000i64;
    let keys = shuffled_keys(n);
    let mut tree = BTree::new(8).unwrap();
    for &key in &keys {
        tree.insert(key, key);
    }

    c.bench_function("search_hit_10000", |b| {
        let mut cursor = keys.iter().cycle();
        b.iter(|| tree.search(*cursor.next().unwrap()));
    });

    c.bench_function("search_miss_10000", |b| {
        b.iter(|| tree.search(n + 1));
    });
}

fn bench_remove(c: &mut Criterion) {
    let n = 1_000i64;
    let keys = shuffled_keys(n);

    c.bench_function("insert_then_remove_1000", |b| {
        b.iter(|| {
            let mut tree = BTree::new(8).unwrap();
            for &key in &keys {
                tree.insert(key, key);
            }
            for &key in &keys {
                tree.remove(key);
            }
            tree
        });
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
