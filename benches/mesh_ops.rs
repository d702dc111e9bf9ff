//! Benchmarks for selection and cutting.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ringcut::algo::subdivide::{EdgeSubdivider, RingSubdivider, SubdivideOptions};
use ringcut::prelude::*;
use ringcut::select::{classify, reconcile, ring_edges};

/// A grid with a checkerboard of selected faces plus one full row.
fn selected_grid(n: usize) -> PolyMesh {
    let mut mesh = quad_grid(n, n).unwrap();
    mesh.select_mode = SelectMode::FACE;
    for j in 0..n {
        for i in 0..n {
            if (i + j) % 2 == 0 || j == n / 2 {
                mesh.select_face(FaceId::new(j * n + i));
            }
        }
    }
    mesh
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("quad_grid_100x100", |b| {
        b.iter(|| quad_grid(100, 100).unwrap());
    });
}

fn bench_classification(c: &mut Criterion) {
    let mesh = selected_grid(100);
    let candidates: Vec<EdgeId> = mesh.selected_edges().collect();
    let topo = Topology::new(&mesh);

    c.bench_function("classify_100x100", |b| {
        b.iter(|| classify(&topo, &candidates, false).unwrap());
    });

    c.bench_function("classify_caps_100x100", |b| {
        b.iter(|| classify(&topo, &candidates, true).unwrap());
    });

    c.bench_function("ring_edges_100x100", |b| {
        b.iter(|| ring_edges(&topo, &candidates).unwrap());
    });
}

fn bench_cutting(c: &mut Criterion) {
    let n = 50;
    let base = quad_grid(n, 1).unwrap();
    let rungs: Vec<EdgeId> = (0..=n)
        .map(|i| {
            base.find_edge(VertexId::new(i), VertexId::new(i + n + 1))
                .unwrap()
        })
        .collect();

    for cuts in [1, 8] {
        c.bench_function(&format!("ring_cut_strip_{}_cuts_{}", n, cuts), |b| {
            b.iter_batched(
                || base.clone(),
                |mut mesh| {
                    let report = RingSubdivider
                        .subdivide(&mut mesh, &rungs, &SubdivideOptions::new(cuts))
                        .unwrap();
                    reconcile(&mesh, &report)
                },
                BatchSize::SmallInput,
            );
        });
    }

    let block = quad_grid(10, 10).unwrap();
    let all: Vec<EdgeId> = block.edge_ids().collect();
    c.bench_function("grid_fill_10x10_cuts_2", |b| {
        b.iter_batched(
            || block.clone(),
            |mut mesh| {
                RingSubdivider
                    .subdivide(&mut mesh, &all, &SubdivideOptions::new(2))
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_construction, bench_classification, bench_cutting);
criterion_main!(benches);
