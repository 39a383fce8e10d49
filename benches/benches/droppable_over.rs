// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_dnd::{Axis, Droppable, Subject, droppable_over};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A board of `n` side-by-side columns, every third one scrolled half out of view.
fn gen_board(n: usize, width: f64, height: f64) -> Vec<Droppable<u32>> {
    let viewport = Rect::new(0.0, 0.0, n as f64 * width, height);
    (0..n)
        .map(|i| {
            let x0 = i as f64 * width;
            let page = Rect::new(x0, 0.0, x0 + width - 8.0, height);
            let d = Droppable::new(i as u32, Axis::Vertical, page);
            if i % 3 == 0 {
                let scrolled = page + kurbo::Vec2::new(0.0, height * 0.5);
                d.with_subject(Subject::clipped(scrolled, viewport))
            } else {
                d
            }
        })
        .collect()
}

/// Nested lists: `n` small horizontal rows scattered inside one large vertical list.
fn gen_nested(n: usize, extent: f64) -> Vec<Droppable<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(n + 1);
    out.push(Droppable::new(
        0,
        Axis::Vertical,
        Rect::new(0.0, 0.0, extent, extent),
    ));
    for i in 0..n {
        let x0 = rng.next_f64() * (extent - 120.0);
        let y0 = rng.next_f64() * (extent - 40.0);
        out.push(Droppable::new(
            i as u32 + 1,
            Axis::Horizontal,
            Rect::new(x0, y0, x0 + 120.0, y0 + 40.0),
        ));
    }
    out
}

fn drag_path(steps: usize, extent: f64, size: f64) -> Vec<Rect> {
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let x = t * (extent - size);
            let y = (1.0 - t) * (extent - size);
            Rect::new(x, y, x + size, y + size * 0.5)
        })
        .collect()
}

fn bench_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");
    for &n in &[8usize, 64, 512] {
        let board = gen_board(n, 220.0, 1200.0);
        let path = drag_path(256, n as f64 * 220.0, 180.0);
        group.throughput(Throughput::Elements((n * path.len()) as u64));
        group.bench_function(format!("card_drag_n{}", n), |b| {
            b.iter(|| {
                for dragged in &path {
                    black_box(droppable_over(black_box(*dragged), &board));
                }
            })
        });
    }
    group.finish();
}

fn bench_large_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_item");
    // Items wide enough to span several columns take the greatest-overlap fallback.
    for &n in &[8usize, 64, 512] {
        let board = gen_board(n, 220.0, 1200.0);
        let path = drag_path(256, n as f64 * 220.0, 900.0);
        group.throughput(Throughput::Elements((n * path.len()) as u64));
        group.bench_function(format!("wide_drag_n{}", n), |b| {
            b.iter(|| {
                for dragged in &path {
                    black_box(droppable_over(black_box(*dragged), &board));
                }
            })
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested");
    for &n in &[64usize, 1024] {
        let lists = gen_nested(n, 4000.0);
        let path = drag_path(256, 4000.0, 140.0);
        group.throughput(Throughput::Elements((n * path.len()) as u64));
        group.bench_function(format!("row_drag_n{}", n), |b| {
            b.iter(|| {
                for dragged in &path {
                    black_box(droppable_over(black_box(*dragged), &lists));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_board, bench_large_item, bench_nested);
criterion_main!(benches);
