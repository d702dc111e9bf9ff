//! Edge ring filtering for edge-mode selections.

use crate::error::Result;
use crate::mesh::{EdgeId, Topology};

/// Keep the candidates that share a face with another selected edge.
///
/// An isolated selected edge has nothing to connect to and is dropped. The
/// output keeps candidate order.
pub fn ring_edges(topo: &Topology<'_>, candidates: &[EdgeId]) -> Result<Vec<EdgeId>> {
    let mesh = topo.mesh();
    let mut ring = Vec::with_capacity(candidates.len());

    'candidates: for &e in candidates {
        for l in topo.radial_loops(e)? {
            for c in topo.other_loops_of_face(l)? {
                if topo.edge_selected(mesh.loop_edge(c)) {
                    ring.push(e);
                    continue 'candidates;
                }
            }
        }
    }

    log::debug!("edge ring kept {} of {} edges", ring.len(), candidates.len());
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{quad_grid, PolyMesh, SelectMode, VertexId};

    fn edge(mesh: &PolyMesh, a: usize, b: usize) -> EdgeId {
        mesh.find_edge(VertexId::new(a), VertexId::new(b)).unwrap()
    }

    fn select_edges(mesh: &mut PolyMesh, pairs: &[(usize, usize)]) -> Vec<EdgeId> {
        mesh.select_all(false);
        mesh.select_mode = SelectMode::EDGE;
        for &(a, b) in pairs {
            let e = edge(mesh, a, b);
            mesh.select_edge(e);
        }
        mesh.selected_edges().collect()
    }

    #[test]
    fn test_isolated_edges_are_dropped() {
        // 4---5---6---7
        // |   |   |   |
        // 0---1---2---3
        let mut mesh = quad_grid(3, 1).unwrap();
        let candidates = select_edges(&mut mesh, &[(0, 4), (2, 6), (3, 7)]);

        let ring = ring_edges(&Topology::new(&mesh), &candidates).unwrap();
        assert_eq!(ring, vec![edge(&mesh, 2, 6), edge(&mesh, 3, 7)]);
    }

    #[test]
    fn test_full_ring_is_kept() {
        let mut mesh = quad_grid(3, 1).unwrap();
        let candidates = select_edges(&mut mesh, &[(0, 4), (1, 5), (2, 6), (3, 7)]);

        let ring = ring_edges(&Topology::new(&mesh), &candidates).unwrap();
        assert_eq!(ring, candidates);
    }

    #[test]
    fn test_single_edge_is_dropped() {
        let mut mesh = quad_grid(3, 1).unwrap();
        let candidates = select_edges(&mut mesh, &[(1, 5)]);

        let ring = ring_edges(&Topology::new(&mesh), &candidates).unwrap();
        assert!(ring.is_empty());
    }
}
