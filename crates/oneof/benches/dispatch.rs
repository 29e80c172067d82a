#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Dispatch benchmarks.
//!
//! Compares table-driven visit dispatch against checked typed access and
//! against a hand-written enum `match`, across list widths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oneof::{visit, visit_with, Variant, Visitor};
use std::hint::black_box;

type Narrow = Variant<(u64, f64)>;
type Wide = Variant<(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, char, bool)>;

/// Widens any numeric-ish alternative to `u64`.
struct Widen;

macro_rules! widen_as {
    ($($ty:ty),+) => {
        $(
            impl<'a> Visitor<&'a $ty> for Widen {
                type Output = u64;
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless
                )]
                fn visit(&mut self, value: &'a $ty) -> u64 {
                    *value as u64
                }
            }
        )+
    };
}

widen_as!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, char, bool);

enum Plain {
    Int(u64),
    Float(f64),
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn widen_plain(value: &Plain) -> u64 {
    match value {
        Plain::Int(v) => *v,
        Plain::Float(v) => *v as u64,
    }
}

fn narrow_values(n: usize) -> Vec<Narrow> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Narrow::new(i as u64)
            } else {
                Narrow::new(i as f64)
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn wide_values(n: usize) -> Vec<Wide> {
    (0..n)
        .map(|i| match i % 4 {
            0 => Wide::new(i as u8),
            1 => Wide::new(i as i32),
            2 => Wide::new(i as f32),
            _ => Wide::new(i % 2 == 0),
        })
        .collect()
}

/// Table dispatch vs. a native `match` on a two-alternative list.
fn bench_narrow_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/narrow");

    for n in [100, 1_000, 10_000] {
        let values = narrow_values(n);
        let plain: Vec<Plain> = (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Plain::Int(i as u64)
                } else {
                    Plain::Float(i as f64)
                }
            })
            .collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("visit", n), &values, |b, values| {
            b.iter(|| {
                let mut widen = visit_with(Widen);
                values
                    .iter()
                    .map(|value| widen.apply(value))
                    .fold(0_u64, u64::wrapping_add)
            });
        });
        group.bench_with_input(BenchmarkId::new("match", n), &plain, |b, plain| {
            b.iter(|| plain.iter().map(widen_plain).fold(0_u64, u64::wrapping_add));
        });
    }

    group.finish();
}

/// Table dispatch cost does not grow with list width.
fn bench_wide_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/wide");

    for n in [100, 1_000, 10_000] {
        let values = wide_values(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                values
                    .iter()
                    .map(|value| visit(Widen, black_box(value)))
                    .fold(0_u64, u64::wrapping_add)
            });
        });
    }

    group.finish();
}

/// Checked typed access, hitting and missing.
fn bench_typed_access(c: &mut Criterion) {
    let values = narrow_values(1_000);

    c.bench_function("access/get_hit_or_miss", |b| {
        b.iter(|| {
            values
                .iter()
                .filter_map(|value| black_box(value).get::<u64, _>().ok())
                .fold(0_u64, |acc, v| acc.wrapping_add(*v))
        });
    });
}

/// Clone goes through dispatch as well.
fn bench_clone(c: &mut Criterion) {
    let values: Vec<Variant<(u64, String)>> = (0..1_000_u64)
        .map(|i| {
            if i % 2 == 0 {
                Variant::new(i)
            } else {
                Variant::new(format!("value-{i}"))
            }
        })
        .collect();

    c.bench_function("lifecycle/clone", |b| {
        b.iter(|| black_box(values.clone()));
    });
}

criterion_group!(
    benches,
    bench_narrow_dispatch,
    bench_wide_dispatch,
    bench_typed_access,
    bench_clone
);
criterion_main!(benches);
