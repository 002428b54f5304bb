//! Benchmarks for the expression evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. arithmetic_chain: Long flat `1 + 1 + ...` chains (loop-heavy, no recursion)
//! 2. nesting: Parenthesized input close to the default depth limit
//! 3. calculator: The two-operand path, for comparison

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use reckon_core::{
    calculator::{Operator, calculate},
    evaluator::{DEFAULT_MAX_DEPTH, evaluate},
};

/// Generate an arithmetic expression like "1 + 1 + 1 + ... + 1" with `n` additions.
fn generate_arithmetic_chain(n: usize) -> String {
    let mut expr = String::from("1");
    for _ in 0..n {
        expr.push_str(" + 1");
    }
    expr
}

/// Generate `depth` nested groups around a small product.
fn generate_nested(depth: usize) -> String {
    format!("{}2*3{}", "(".repeat(depth), ")".repeat(depth))
}

fn bench_arithmetic_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic_chain");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let source = generate_arithmetic_chain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| evaluate(black_box(source)).expect("Evaluation failed"));
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting");

    // Stay under the default limit; the top level counts as one.
    for depth in [1, 10, DEFAULT_MAX_DEPTH - 1] {
        let source = generate_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, source| {
            b.iter(|| evaluate(black_box(source)).expect("Evaluation failed"));
        });
    }

    group.finish();
}

fn bench_calculator(c: &mut Criterion) {
    c.bench_function("calculator_divide", |b| {
        b.iter(|| calculate(black_box(9.0), black_box(3.0), Operator::Divide))
    });
    c.bench_function("expression_divide", |b| {
        b.iter(|| evaluate(black_box("9 / 3")))
    });
}

criterion_group!(benches, bench_arithmetic_chain, bench_nesting, bench_calculator);
criterion_main!(benches);
