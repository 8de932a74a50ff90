use std::borrow::Borrow;
use std::hash::Hash;
use std::collections::BTreeSet;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use simple_bst::SimpleBSTSet;
// Looking to measure tree implementation, not hasher performance so using a faster hasher
use fnv::FnvHashSet as HashSet;

use rbtree::RedBlackTree;

trait Set<T>: Default {
    fn len(&self) -> usize;

    fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + Hash + Eq + ?Sized;

    fn add(&mut self, value: T) -> bool;
}

macro_rules! impl_set {
    ($name:ident, $add:ident, $bound:ident $(+ $other_bound:ident)*) => {
        impl<T> Set<T> for $name<T>
            where T: $bound $(+ $other_bound)*,
        {
            fn len(&self) -> usize {
                $name::len(self)
            }

            fn contains<Q>(&self, value: &Q) -> bool
                where T: Borrow<Q>,
                      Q: Ord + Hash + Eq + ?Sized
            {
                $name::contains(self, value)
            }

            fn add(&mut self, value: T) -> bool {
                $name::$add(self, value)
            }
        }
    };
}

impl_set!(HashSet, insert, Hash + Eq);
impl_set!(BTreeSet, insert, Ord);
impl_set!(SimpleBSTSet, add, Ord);
impl_set!(RedBlackTree, add, Ord);

#[derive(Debug, Clone)]
struct Values {
    values: Vec<i64>,
}

impl Values {
    /// Deterministically generates `nvalues` unique values in a random order
    pub fn shuffled(nvalues: u32) -> Self {
        let mut values = Self::sorted(nvalues).values;

        // Use seed to make this deterministic
        let mut rng = StdRng::seed_from_u64(45930923092);
        // Shuffle to ensure that values are in a uniformly random order
        values.shuffle(&mut rng);

        Self {values}
    }

    /// Generates `nvalues` unique values in increasing order, the worst case for an unbalanced BST
    pub fn sorted(nvalues: u32) -> Self {
        let n = nvalues as i64;
        // Multiply by 10 so that numbers aren't consecutive
        let values = (0..n).map(|i| (i - n/2) * 10).collect();

        Self {values}
    }

    pub fn get(&self, value_i: usize) -> i64 {
        self.values[value_i]
    }
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

/// Runs many consecutive adds on a set
fn benchmark_adds<M: Set<i64>>(values: &Values, adds: usize) -> M {
    let mut set = M::default();

    for value_i in 0..adds {
        black_box(set.add(values.get(value_i)));
    }

    set
}

/// Runs many consecutive lookups on a set, half of which miss
fn benchmark_contains<M: Set<i64>>(values: &Values, set: &M, lookups: usize) {
    debug_assert_eq!(set.len(), lookups);
    for i in 0..lookups {
        // Look values up in the opposite order to how they were added
        let value = values.get(lookups - i - 1);
        black_box(set.contains(&value));
        // Values are multiples of 10, so this is never present
        black_box(set.contains(&(value + 1)));
    }
}

pub fn bench_add_shuffled(c: &mut Criterion) {
    const ADDS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::shuffled(slice_max(ADDS) as u32);

    let mut group = c.benchmark_group("add shuffled");
    for adds in ADDS {
        group.bench_with_input(BenchmarkId::new("HashSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<HashSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<BTreeSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("SimpleBSTSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<SimpleBSTSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("RedBlackTree", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<RedBlackTree<i64>>(&values, adds))
        });
    }
    group.finish();
}

pub fn bench_add_sorted(c: &mut Criterion) {
    const ADDS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::sorted(slice_max(ADDS) as u32);

    let mut group = c.benchmark_group("add sorted");
    for adds in ADDS {
        group.bench_with_input(BenchmarkId::new("HashSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<HashSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<BTreeSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("SimpleBSTSet", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<SimpleBSTSet<i64>>(&values, adds))
        });
        group.bench_with_input(BenchmarkId::new("RedBlackTree", adds), adds, |b, &adds| {
            b.iter(|| benchmark_adds::<RedBlackTree<i64>>(&values, adds))
        });
    }
    group.finish();
}

pub fn bench_contains_sorted(c: &mut Criterion) {
    const LOOKUPS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::sorted(slice_max(LOOKUPS) as u32);

    let mut group = c.benchmark_group("contains after sorted adds");
    for lookups in LOOKUPS {
        group.bench_with_input(BenchmarkId::new("HashSet", lookups), lookups, |b, &lookups| {
            let set = benchmark_adds::<HashSet<i64>>(&values, lookups);
            b.iter(|| benchmark_contains(&values, &set, lookups))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", lookups), lookups, |b, &lookups| {
            let set = benchmark_adds::<BTreeSet<i64>>(&values, lookups);
            b.iter(|| benchmark_contains(&values, &set, lookups))
        });
        group.bench_with_input(BenchmarkId::new("SimpleBSTSet", lookups), lookups, |b, &lookups| {
            let set = benchmark_adds::<SimpleBSTSet<i64>>(&values, lookups);
            b.iter(|| benchmark_contains(&values, &set, lookups))
        });
        group.bench_with_input(BenchmarkId::new("RedBlackTree", lookups), lookups, |b, &lookups| {
            let set = benchmark_adds::<RedBlackTree<i64>>(&values, lookups);
            b.iter(|| benchmark_contains(&values, &set, lookups))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_add_shuffled,
    bench_add_sorted,
    bench_contains_sorted,
);

criterion_main!(benches);
