//! Boundary classification of a face selection.
//!
//! An edge is *inner* when it separates two selected faces. With caps kept,
//! an edge touching a single selected face is also inner when that face is a
//! cap of a straight strip: an even-rank face whose only selected neighbour
//! is attached through the edge directly opposite.

use super::scratch::EdgeScratch;
use crate::error::Result;
use crate::mesh::{EdgeId, LoopId, Topology};

/// Reduce `candidates` to the edges inside the face selection.
///
/// The output keeps the order of first appearance in `candidates`; repeated
/// candidates are classified once.
///
/// Non-manifold edges count a selected face once per use, so such edges may
/// be over-included.
///
/// # Errors
///
/// Fails with [`MeshError::TraversalLimit`](crate::error::MeshError) or
/// [`MeshError::LoopsNotCofacial`](crate::error::MeshError) if the mesh
/// cycles are malformed.
///
/// # Example
///
/// ```
/// use ringcut::mesh::{quad_grid, FaceId, SelectMode, Topology};
/// use ringcut::select::classify;
///
/// let mut mesh = quad_grid(4, 1).unwrap();
/// for f in 0..4 {
///     mesh.select_face(FaceId::new(f));
/// }
/// mesh.select_mode = SelectMode::FACE;
///
/// let candidates: Vec<_> = mesh.selected_edges().collect();
/// let topo = Topology::new(&mesh);
/// assert_eq!(classify(&topo, &candidates, false).unwrap().len(), 3);
/// assert_eq!(classify(&topo, &candidates, true).unwrap().len(), 5);
/// ```
pub fn classify(
    topo: &Topology<'_>,
    candidates: &[EdgeId],
    keep_caps: bool,
) -> Result<Vec<EdgeId>> {
    let mut scratch = EdgeScratch::with_capacity(candidates.len());
    let mut inner = Vec::with_capacity(candidates.len());
    let mut caps = 0usize;
    let mut repeats = 0usize;

    for &e in candidates {
        if scratch.visit(e) > 1 {
            repeats += 1;
            continue;
        }

        let count = selected_faces(topo, &mut scratch, e)?;
        if count > 1 {
            inner.push(e);
        } else if count == 1 && keep_caps && is_strip_cap(topo, &mut scratch, e)? {
            caps += 1;
            inner.push(e);
        }
    }

    log::debug!(
        "classified {} candidates ({} repeated, {} edges visited): {} inner, {} caps",
        candidates.len(),
        repeats,
        scratch.len(),
        inner.len(),
        caps
    );
    Ok(inner)
}

/// Selected faces around `e`, memoised for the pass.
fn selected_faces(topo: &Topology<'_>, scratch: &mut EdgeScratch, e: EdgeId) -> Result<usize> {
    if let Some(count) = scratch.selected_faces(e) {
        return Ok(count);
    }

    let mesh = topo.mesh();
    let loops = topo.radial_loops(e)?;
    if loops.len() > 2 {
        log::warn!(
            "{:?} is used by {} faces, selected faces are counted per use",
            e,
            loops.len()
        );
    }
    let count = loops
        .iter()
        .filter(|&&l| topo.face_selected(mesh.loop_face(l)))
        .count();
    scratch.set_selected_faces(e, count);
    Ok(count)
}

/// Whether `e`, which touches exactly one selected face, caps a strip.
fn is_strip_cap(topo: &Topology<'_>, scratch: &mut EdgeScratch, e: EdgeId) -> Result<bool> {
    let mesh = topo.mesh();
    let Some(l) = topo
        .radial_loops(e)?
        .into_iter()
        .find(|&l| topo.face_selected(mesh.loop_face(l)))
    else {
        return Ok(false);
    };

    let rank = mesh.face_rank(mesh.loop_face(l));
    if rank % 2 == 1 {
        return Ok(false);
    }

    // The face of `l` is selected, so any second selected use of a side is a
    // selected neighbour across that side.
    let mut neighbour: Option<LoopId> = None;
    for c in topo.other_loops_of_face(l)? {
        if selected_faces(topo, scratch, mesh.loop_edge(c))? > 1 {
            if neighbour.is_some() {
                return Ok(false);
            }
            neighbour = Some(c);
        }
    }

    match neighbour {
        Some(c) => Ok(topo.loop_distance(l, c)? == rank / 2),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::mesh::{
        build_from_polygons, build_from_triangles, quad_grid, FaceId, PolyMesh, SelectMode,
        VertexId,
    };
    use nalgebra::Point3;
    use std::collections::HashSet;

    fn edge(mesh: &PolyMesh, a: usize, b: usize) -> EdgeId {
        mesh.find_edge(VertexId::new(a), VertexId::new(b)).unwrap()
    }

    /// Select the given faces in face mode and flush down to edges.
    fn select_faces(mesh: &mut PolyMesh, faces: &[usize]) {
        mesh.select_all(false);
        for &f in faces {
            mesh.face_mut(FaceId::new(f)).selected = true;
        }
        mesh.select_mode = SelectMode::FACE;
        mesh.flush_selection();
    }

    fn run(mesh: &PolyMesh, keep_caps: bool) -> Vec<EdgeId> {
        let candidates: Vec<EdgeId> = mesh.selected_edges().collect();
        classify(&Topology::new(mesh), &candidates, keep_caps).unwrap()
    }

    fn as_set(edges: &[EdgeId]) -> HashSet<EdgeId> {
        edges.iter().copied().collect()
    }

    #[test]
    fn test_strip_keeps_caps() {
        let mut mesh = quad_grid(4, 1).unwrap();
        select_faces(&mut mesh, &[0, 1, 2, 3]);

        let inner = run(&mesh, true);
        let rungs: HashSet<EdgeId> = (0..5).map(|i| edge(&mesh, i, i + 5)).collect();
        assert_eq!(inner.len(), 5);
        assert_eq!(as_set(&inner), rungs);
    }

    #[test]
    fn test_strip_without_caps() {
        let mut mesh = quad_grid(4, 1).unwrap();
        select_faces(&mut mesh, &[0, 1, 2, 3]);

        let inner = run(&mesh, false);
        let shared: HashSet<EdgeId> = (1..4).map(|i| edge(&mesh, i, i + 5)).collect();
        assert_eq!(as_set(&inner), shared);
    }

    #[test]
    fn test_isolated_triangle_is_empty() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
        select_faces(&mut mesh, &[0]);

        assert_eq!(mesh.selected_edges().count(), 3);
        assert!(run(&mesh, true).is_empty());
    }

    #[test]
    fn test_two_faces_sharing_adjacent_edges() {
        //   3-----4
        //   | \ Y |
        //   | X 2 |
        //   | /   |
        //   0-----1   X = 0 1 2 3, Y = 1 4 3 2
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![1, 4, 3, 2]];
        let mut mesh = build_from_polygons(&vertices, &faces).unwrap();
        select_faces(&mut mesh, &[0, 1]);

        let inner = run(&mesh, true);
        let expected: HashSet<EdgeId> = [edge(&mesh, 1, 2), edge(&mesh, 2, 3)].into();
        assert_eq!(as_set(&inner), expected);
    }

    #[test]
    fn test_l_shape_caps_both_arms() {
        // 6---7---8
        // | F2| F3|
        // 3---4---5
        // | F0| F1|
        // 0---1---2
        let mut mesh = quad_grid(2, 2).unwrap();
        select_faces(&mut mesh, &[0, 1, 3]);

        let inner = run(&mesh, true);
        let expected: HashSet<EdgeId> = [
            edge(&mesh, 1, 4),
            edge(&mesh, 4, 5),
            edge(&mesh, 0, 3),
            edge(&mesh, 7, 8),
        ]
        .into();
        assert_eq!(as_set(&inner), expected);
    }

    #[test]
    fn test_cap_is_only_the_opposite_edge() {
        let mut mesh = quad_grid(2, 1).unwrap();
        select_faces(&mut mesh, &[0, 1]);

        let inner = as_set(&run(&mesh, true));
        // Face 0 is 0 1 4 3 with its neighbour across 1-4.
        assert!(inner.contains(&edge(&mesh, 0, 3)));
        assert!(inner.contains(&edge(&mesh, 1, 4)));
        assert!(!inner.contains(&edge(&mesh, 0, 1)));
        assert!(!inner.contains(&edge(&mesh, 3, 4)));
    }

    #[test]
    fn test_output_follows_candidate_order() {
        let mut mesh = quad_grid(4, 1).unwrap();
        select_faces(&mut mesh, &[0, 1, 2, 3]);

        let mut candidates: Vec<EdgeId> = mesh.selected_edges().collect();
        candidates.reverse();
        let first = candidates[0];
        candidates.push(first);

        let inner = classify(&Topology::new(&mesh), &candidates, false).unwrap();
        let expected: Vec<EdgeId> = candidates[..candidates.len() - 1]
            .iter()
            .copied()
            .filter(|e| inner.contains(e))
            .collect();
        assert_eq!(inner, expected);
        assert_eq!(as_set(&inner).len(), inner.len());
    }

    #[test]
    fn test_triangle_strip_has_no_caps() {
        // 1---3---5
        // | \ | \ |
        // 0---2---4
        let vertices: Vec<Point3<f64>> = (0..6)
            .map(|i| Point3::new((i / 2) as f64, (i % 2) as f64, 0.0))
            .collect();
        let faces = [[0, 2, 1], [1, 2, 3], [2, 4, 3], [3, 4, 5]];
        let base = build_from_triangles(&vertices, &faces).unwrap();

        for mask in 0..16usize {
            let mut mesh = base.clone();
            let selected: Vec<usize> = (0..4).filter(|f| mask & (1 << f) != 0).collect();
            select_faces(&mut mesh, &selected);
            assert_eq!(run(&mesh, true), run(&mesh, false), "mask {:04b}", mask);
        }
    }

    /// A strip of faces joined by vertical rungs `i -- i + n + 1`. Face `i`
    /// is a quad when `pentagons[i]` is false, otherwise a pentagon with an
    /// extra vertex above its top side.
    fn mixed_strip(pentagons: &[bool]) -> PolyMesh {
        let n = pentagons.len();
        let mut vertices: Vec<Point3<f64>> =
            (0..=n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        vertices.extend((0..=n).map(|i| Point3::new(i as f64, 1.0, 0.0)));
        let mut faces = Vec::with_capacity(n);
        for (i, &pentagon) in pentagons.iter().enumerate() {
            let (b0, b1, t0, t1) = (i, i + 1, n + 1 + i, n + 2 + i);
            if pentagon {
                let apex = vertices.len();
                vertices.push(Point3::new(i as f64 + 0.5, 1.5, 0.0));
                faces.push(vec![b0, b1, t1, apex, t0]);
            } else {
                faces.push(vec![b0, b1, t1, t0]);
            }
        }
        build_from_polygons(&vertices, &faces).unwrap()
    }

    #[test]
    fn test_pentagon_strip_has_no_caps() {
        let base = mixed_strip(&[true; 4]);

        for mask in 0..16usize {
            let mut mesh = base.clone();
            let selected: Vec<usize> = (0..4).filter(|f| mask & (1 << f) != 0).collect();
            select_faces(&mut mesh, &selected);
            assert_eq!(run(&mesh, true), run(&mesh, false), "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_mixed_strip_caps_only_on_quads() {
        // Pentagons at both ends, so the full selection gains no caps.
        let mut mesh = mixed_strip(&[true, false, true]);
        select_faces(&mut mesh, &[0, 1, 2]);
        assert_eq!(run(&mesh, true), run(&mesh, false));

        let base = mixed_strip(&[true, false, true, false]);
        for mask in 0..16usize {
            let mut mesh = base.clone();
            let selected: Vec<usize> = (0..4).filter(|f| mask & (1 << f) != 0).collect();
            select_faces(&mut mesh, &selected);

            let plain = as_set(&run(&mesh, false));
            let topo = Topology::new(&mesh);
            for e in run(&mesh, true).into_iter().filter(|e| !plain.contains(e)) {
                let capped: Vec<FaceId> = topo
                    .faces_of_edge(e)
                    .unwrap()
                    .into_iter()
                    .filter(|&f| topo.face_selected(f))
                    .collect();
                assert_eq!(capped.len(), 1, "mask {:04b}", mask);
                assert_eq!(mesh.face_rank(capped[0]), 4, "mask {:04b}", mask);
            }
        }
    }

    #[test]
    fn test_grid_selection_properties() {
        let base = quad_grid(3, 3).unwrap();

        for mask in 0..512usize {
            let mut mesh = base.clone();
            let selected: Vec<usize> = (0..9).filter(|f| mask & (1 << f) != 0).collect();
            select_faces(&mut mesh, &selected);

            let candidates: Vec<EdgeId> = mesh.selected_edges().collect();
            let topo = Topology::new(&mesh);
            let count = |e: EdgeId| topo.selected_face_count(e).unwrap();
            let shared: HashSet<EdgeId> =
                candidates.iter().copied().filter(|&e| count(e) > 1).collect();

            for keep_caps in [false, true] {
                let inner = classify(&topo, &candidates, keep_caps).unwrap();
                assert!(inner.iter().all(|&e| count(e) > 0), "mask {:09b}", mask);
                assert!(shared.is_subset(&as_set(&inner)), "mask {:09b}", mask);
                if !keep_caps {
                    assert_eq!(as_set(&inner), shared, "mask {:09b}", mask);
                }

                let again = classify(&topo, &inner, keep_caps).unwrap();
                assert_eq!(again, inner, "mask {:09b}", mask);
            }
        }
    }

    #[test]
    fn test_non_manifold_fin() {
        // Three quads hanging off edge 0-1.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![1, 0, 5, 4], vec![0, 1, 6, 7]];
        let mut mesh = build_from_polygons(&vertices, &faces).unwrap();
        select_faces(&mut mesh, &[0, 1, 2]);

        let hinge = edge(&mesh, 0, 1);
        assert_eq!(mesh.edge_degree(hinge), 3);
        assert_eq!(run(&mesh, false), vec![hinge]);
    }

    #[test]
    fn test_broken_radial_cycle_is_an_error() {
        let mut mesh = quad_grid(2, 1).unwrap();
        select_faces(&mut mesh, &[0, 1]);

        // Send a border loop into a cycle that never returns to it.
        let border = edge(&mesh, 0, 1);
        let start = mesh.edge_loop(border);
        let stray = mesh.edge_loop(edge(&mesh, 2, 5));
        mesh.loops[start.index()].radial_next = stray;

        let result = classify(&Topology::new(&mesh), &[border], true);
        assert!(matches!(result, Err(MeshError::TraversalLimit { .. })));
    }
}
