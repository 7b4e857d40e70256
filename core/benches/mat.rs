//! Matrix operation benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rigmath_core::prelude::*;

fn model() -> Mat4 {
    let mut m = translate(1.0, -2.0, 3.0);
    m.rotate_euler(degs(30.0), degs(-15.0), degs(60.0))
        .scale(2.0, 2.0, 0.5);
    m
}

fn multiply(c: &mut Criterion) {
    let (a, b) = (model(), rotate_axis(degs(45.0), &vec3(1.0, 1.0, 0.0)));
    c.bench_function("mat4 * mat4", |bch| {
        bch.iter(|| black_box(a) * black_box(b))
    });
}

fn inverse(c: &mut Criterion) {
    let m = model();
    c.bench_function("mat4 inverse", |bch| {
        bch.iter(|| black_box(m).inverse())
    });
    c.bench_function("mat4 determinant", |bch| {
        bch.iter(|| black_box(m).determinant())
    });
}

fn transform(c: &mut Criterion) {
    let m = model();
    let pts: Vec<Vec3> = (0..1000)
        .map(|i| vec3(i as f64, -(i as f64) * 0.5, 10.0))
        .collect();
    c.bench_function("transform 1000 points", |bch| {
        bch.iter(|| {
            pts.iter()
                .map(|p| m.transform_point(black_box(p)))
                .fold(Vec3::ZERO, |acc, p| acc + p)
        })
    });
}

fn factories(c: &mut Criterion) {
    c.bench_function("rotate_euler", |bch| {
        bch.iter(|| {
            rotate_euler(
                black_box(degs(10.0)),
                black_box(degs(20.0)),
                black_box(degs(30.0)),
            )
        })
    });
    c.bench_function("look_at", |bch| {
        let (eye, at) = (vec3(3.0, 4.0, 5.0), Vec3::ZERO);
        bch.iter(|| look_at(black_box(&eye), black_box(&at), &Vec3::Y))
    });
}

criterion_group!(benches, multiply, inverse, transform, factories);
criterion_main!(benches);
