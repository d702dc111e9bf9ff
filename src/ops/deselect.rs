//! Deselect Boundary operator.

use crate::mesh::{EdgeId, Topology};
use crate::select::classify;

use super::{poll, select_edges_only, EditSession, MeshObject, OperatorOutcome};

/// Options for [`deselect_boundary`].
#[derive(Debug, Clone, Default)]
pub struct DeselectBoundaryOptions {
    /// Keep the cap edges that close a straight strip of selected faces.
    pub keep_caps: bool,
}

impl DeselectBoundaryOptions {
    /// Set whether strip caps are kept.
    pub fn with_keep_caps(mut self, keep_caps: bool) -> Self {
        self.keep_caps = keep_caps;
        self
    }
}

/// Deselect the boundary edges of the selected faces.
///
/// The inner edges of the selection become the new edge selection. Cancels
/// if the object is not in edit mode or no inner edge exists.
pub fn deselect_boundary(
    object: &mut MeshObject,
    options: &DeselectBoundaryOptions,
) -> OperatorOutcome {
    if !poll(object) {
        return OperatorOutcome::cancelled();
    }

    let mut session = EditSession::open(object);
    let candidates: Vec<EdgeId> = session.selected_edges().collect();
    let inner = match classify(&Topology::new(&session), &candidates, options.keep_caps) {
        Ok(edges) => edges,
        Err(err) => return OperatorOutcome::finished().with_error(&err),
    };
    if inner.is_empty() {
        return OperatorOutcome::cancelled();
    }

    select_edges_only(&mut session, &inner);
    OperatorOutcome::finished().with_info(format!("{} edges selected", inner.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_from_triangles, quad_grid, FaceId, PolyMesh, SelectMode, VertexId};
    use crate::ops::{ObjectMode, OperatorStatus};
    use nalgebra::Point3;

    fn editing(mesh: PolyMesh, faces: &[usize]) -> MeshObject {
        let mut object = MeshObject::new("test", mesh);
        object.enter_edit_mode();
        {
            let mut session = EditSession::open(&mut object);
            session.select_mode = SelectMode::FACE;
            for &f in faces {
                session.select_face(FaceId::new(f));
            }
        }
        object
    }

    fn edge(mesh: &PolyMesh, a: usize, b: usize) -> EdgeId {
        mesh.find_edge(VertexId::new(a), VertexId::new(b)).unwrap()
    }

    #[test]
    fn test_strip_with_caps() {
        let mut object = editing(quad_grid(4, 1).unwrap(), &[0, 1, 2, 3]);
        let options = DeselectBoundaryOptions::default().with_keep_caps(true);

        let outcome = deselect_boundary(&mut object, &options);
        assert_eq!(outcome.status, OperatorStatus::Finished);
        assert_eq!(outcome.errors().count(), 0);

        let mesh = object.mesh();
        assert_eq!(mesh.select_mode, SelectMode::EDGE);
        let mut selected: Vec<EdgeId> = mesh.selected_edges().collect();
        selected.sort();
        let mut rungs: Vec<EdgeId> = (0..5).map(|i| edge(mesh, i, i + 5)).collect();
        rungs.sort();
        assert_eq!(selected, rungs);
        assert_eq!(mesh.selected_faces().count(), 0);
    }

    #[test]
    fn test_strip_without_caps() {
        let mut object = editing(quad_grid(4, 1).unwrap(), &[0, 1, 2, 3]);

        let outcome = deselect_boundary(&mut object, &DeselectBoundaryOptions::default());
        assert!(outcome.is_finished());
        assert_eq!(object.mesh().selected_edges().count(), 3);
    }

    #[test]
    fn test_single_triangle_cancels() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
        let mut object = editing(mesh, &[0]);
        let before = object.mesh().clone();

        let options = DeselectBoundaryOptions::default().with_keep_caps(true);
        let outcome = deselect_boundary(&mut object, &options);
        assert_eq!(outcome.status, OperatorStatus::Cancelled);

        let after = object.mesh();
        assert_eq!(after.select_mode, before.select_mode);
        assert_eq!(after.selected_edges().count(), 3);
        assert!(after.face(FaceId::new(0)).selected);
    }

    #[test]
    fn test_object_mode_cancels() {
        let mut object = MeshObject::new("test", quad_grid(2, 1).unwrap());
        assert_eq!(object.mode(), ObjectMode::Object);

        let outcome = deselect_boundary(&mut object, &DeselectBoundaryOptions::default());
        assert_eq!(outcome.status, OperatorStatus::Cancelled);
        assert!(outcome.reports.is_empty());
    }

    #[test]
    fn test_classification_error_is_reported() {
        let mut object = editing(quad_grid(2, 1).unwrap(), &[0, 1]);
        {
            let mut session = EditSession::open(&mut object);
            let border = edge(&session, 0, 1);
            let start = session.edge_loop(border);
            let stray = session.edge_loop(edge(&session, 2, 5));
            session.loops[start.index()].radial_next = stray;
        }

        let outcome = deselect_boundary(&mut object, &DeselectBoundaryOptions::default());
        assert_eq!(outcome.status, OperatorStatus::Finished);
        assert_eq!(outcome.errors().count(), 1);
    }
}
