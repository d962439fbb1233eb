use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use algo_patterns::tree::TreeNode;
use algo_patterns::tree_dfs::{pre_order, pre_order_iterative};

fn complete_tree(depth: u32, next_val: &mut i32) -> Option<Box<TreeNode>> {
    if depth == 0 {
        return None;
    }
    let val = *next_val;
    *next_val += 1;
    Some(Box::new(TreeNode {
        val,
        left: complete_tree(depth - 1, next_val),
        right: complete_tree(depth - 1, next_val),
    }))
}

fn left_chain(len: usize) -> Option<Box<TreeNode>> {
    let mut root = None;
    for val in 0..len as i32 {
        root = Some(Box::new(TreeNode {
            val,
            left: root,
            right: None,
        }));
    }
    root
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut next_val = 0;
    let complete = complete_tree(14, &mut next_val);
    let chain = left_chain(10_000);

    let mut group = c.benchmark_group("PreOrder");

    group.bench_function("recursive complete depth 14", |b| {
        b.iter(|| pre_order(black_box(complete.as_deref())))
    });

    group.bench_function("iterative complete depth 14", |b| {
        b.iter(|| pre_order_iterative(black_box(complete.as_deref())))
    });

    group.bench_function("iterative chain 10k", |b| {
        b.iter(|| pre_order_iterative(black_box(chain.as_deref())))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
