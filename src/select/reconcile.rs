//! Derive an edge selection from a subdivision report.

use std::collections::HashSet;

use crate::algo::subdivide::SubdivideReport;
use crate::mesh::{EdgeId, PolyMesh};

/// Edges to select after a cut.
///
/// Every edge incident to an inner vertex that is not a segment of a split
/// edge is selected, followed by any reported inner edge not yet included.
/// The incidence pass recovers the new cross edges even when a subdivider
/// reports `inner_edges` incompletely.
pub fn reconcile(mesh: &PolyMesh, report: &SubdivideReport) -> Vec<EdgeId> {
    let split: HashSet<EdgeId> = report.split_edges.iter().copied().collect();
    let mut seen = HashSet::new();

    let incident = report
        .inner_vertices
        .iter()
        .flat_map(|&v| mesh.vertex_edges(v).iter().copied());

    incident
        .chain(report.inner_edges.iter().copied())
        .filter(|e| !split.contains(e) && seen.insert(*e))
        .collect()
}
