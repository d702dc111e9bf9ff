//! Built-in edge subdivider.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::fill::{fill_face, FacePlan};
use super::{EdgeSubdivider, SubdivideOptions, SubdivideReport};
use crate::error::{MeshError, Result};
use crate::mesh::{EdgeId, FaceId, PolyMesh, VertexId};

/// Subdivider that cuts edges evenly and connects the cuts across faces.
///
/// See the [module documentation](super) for the face patterns it produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingSubdivider;

/// The vertices inserted along one input edge.
#[derive(Debug, Clone)]
pub(super) struct EdgeCuts {
    from: VertexId,
    verts: Vec<VertexId>,
}

impl EdgeCuts {
    /// Cut vertices ordered starting from the end at `start`.
    pub(super) fn along(&self, start: VertexId) -> Vec<VertexId> {
        if start == self.from {
            self.verts.clone()
        } else {
            self.verts.iter().rev().copied().collect()
        }
    }
}

impl EdgeSubdivider for RingSubdivider {
    fn subdivide(
        &self,
        mesh: &mut PolyMesh,
        edges: &[EdgeId],
        options: &SubdivideOptions,
    ) -> Result<SubdivideReport> {
        options.validate()?;

        let mut seen = HashSet::with_capacity(edges.len());
        let unique: Vec<EdgeId> = edges.iter().copied().filter(|&e| seen.insert(e)).collect();
        if unique.is_empty() {
            return Err(MeshError::InvalidState("no edges to subdivide".to_string()));
        }
        if let Some(&wire) = unique.iter().find(|&&e| !mesh.edge_loop(e).is_valid()) {
            return Err(MeshError::WireEdge(wire));
        }

        // Faces are planned against the original topology, before any cut.
        let plans = plan_faces(mesh, &unique, &seen);

        let mut report = SubdivideReport::default();
        let mut cuts = HashMap::with_capacity(unique.len());
        for &e in &unique {
            cuts.insert(e, cut_edge(mesh, e, options.cuts, &mut report));
        }

        for plan in &plans {
            fill_face(mesh, plan, &cuts, options, &mut report)?;
        }

        log::debug!(
            "subdivided {} edges over {} faces: {} new vertices, {} inner edges",
            unique.len(),
            plans.len(),
            report.inner_vertices.len(),
            report.inner_edges.len()
        );

        Ok(report)
    }
}

/// Record corners and cut sides of every face touching the input edges.
fn plan_faces(mesh: &PolyMesh, edges: &[EdgeId], cut: &HashSet<EdgeId>) -> Vec<FacePlan> {
    let faces: BTreeSet<FaceId> = edges
        .iter()
        .flat_map(|&e| mesh.radial_loops(e).map(|l| mesh.loop_face(l)))
        .collect();

    faces
        .into_iter()
        .map(|face| FacePlan {
            face,
            corners: mesh.face_vertices(face).collect(),
            sides: mesh
                .face_edges(face)
                .map(|e| cut.contains(&e).then_some(e))
                .collect(),
        })
        .collect()
}

/// Split `e` into `n + 1` equal segments.
fn cut_edge(mesh: &mut PolyMesh, e: EdgeId, n: usize, report: &mut SubdivideReport) -> EdgeCuts {
    let [a, b] = mesh.edge_vertices(e);
    let pa = *mesh.position(a);
    let pb = *mesh.position(b);

    report.split_edges.push(e);
    let mut verts = Vec::with_capacity(n);
    let mut segment = e;
    for i in 1..=n {
        let t = i as f64 / (n + 1) as f64;
        // `segment` always runs from the previous cut towards `b`.
        let (v, rest) = mesh.split_edge(segment, pa + (pb - pa) * t);
        verts.push(v);
        report.inner_vertices.push(v);
        report.split_edges.push(rest);
        segment = rest;
    }

    EdgeCuts { from: a, verts }
}
