//! Read-only adjacency queries over a [`PolyMesh`].
//!
//! [`Topology`] is the view the selection algorithms work against. Every walk is
//! bounded: face walks stop after the face rank, radial walks after
//! [`MAX_RADIAL_DEGREE`] steps. A cycle that fails to close within its bound
//! is reported as [`MeshError::TraversalLimit`] rather than looping forever.

use super::halfedge::{PolyMesh, MAX_RADIAL_DEGREE};
use super::index::{EdgeId, FaceId, LoopId};
use crate::error::{MeshError, Result};

/// Borrowed, side-effect free adjacency view of a mesh.
#[derive(Debug, Clone, Copy)]
pub struct Topology<'a> {
    mesh: &'a PolyMesh,
}

impl<'a> Topology<'a> {
    /// Create a view over `mesh`.
    pub fn new(mesh: &'a PolyMesh) -> Self {
        Self { mesh }
    }

    /// The underlying mesh.
    #[inline]
    pub fn mesh(&self) -> &'a PolyMesh {
        self.mesh
    }

    /// Loops using `edge`, starting from the edge's representative loop.
    pub fn radial_loops(&self, edge: EdgeId) -> Result<Vec<LoopId>> {
        let start = self.mesh.edge_loop(edge);
        let mut loops = Vec::new();
        if !start.is_valid() {
            return Ok(loops);
        }

        let mut l = start;
        for _ in 0..MAX_RADIAL_DEGREE {
            loops.push(l);
            l = self.mesh.radial_next(l);
            if l == start {
                return Ok(loops);
            }
        }
        Err(MeshError::TraversalLimit {
            element: format!("{:?}", edge),
            limit: MAX_RADIAL_DEGREE,
        })
    }

    /// All faces whose boundary uses `edge`, one entry per loop.
    ///
    /// A face that uses the edge twice is listed twice.
    pub fn faces_of_edge(&self, edge: EdgeId) -> Result<Vec<FaceId>> {
        Ok(self
            .radial_loops(edge)?
            .into_iter()
            .map(|l| self.mesh.loop_face(l))
            .collect())
    }

    /// The loops of `l`'s face other than `l`, in face-cycle order starting
    /// after `l`.
    pub fn other_loops_of_face(&self, l: LoopId) -> Result<Vec<LoopId>> {
        let rank = self.mesh.face_rank(self.mesh.loop_face(l));
        let mut loops = Vec::with_capacity(rank.saturating_sub(1));
        let mut c = self.mesh.next(l);
        for _ in 0..rank {
            if c == l {
                return Ok(loops);
            }
            loops.push(c);
            c = self.mesh.next(c);
        }
        Err(MeshError::TraversalLimit {
            element: format!("{:?}", self.mesh.loop_face(l)),
            limit: rank,
        })
    }

    /// Number of `next` steps from `from` to `to` around their face.
    ///
    /// Fails with [`MeshError::LoopsNotCofacial`] if `to` is not reached within
    /// the rank of `from`'s face.
    pub fn loop_distance(&self, from: LoopId, to: LoopId) -> Result<usize> {
        let rank = self.mesh.face_rank(self.mesh.loop_face(from));
        let mut l = from;
        for steps in 0..rank {
            if l == to {
                return Ok(steps);
            }
            l = self.mesh.next(l);
        }
        Err(MeshError::LoopsNotCofacial { from, to })
    }

    /// Whether a face is selected.
    #[inline]
    pub fn face_selected(&self, f: FaceId) -> bool {
        self.mesh.face(f).selected
    }

    /// Whether an edge is selected.
    #[inline]
    pub fn edge_selected(&self, e: EdgeId) -> bool {
        self.mesh.edge(e).selected
    }

    /// Number of selected faces around `edge`, counting repeated faces each time.
    pub fn selected_face_count(&self, edge: EdgeId) -> Result<usize> {
        Ok(self
            .faces_of_edge(edge)?
            .into_iter()
            .filter(|&f| self.face_selected(f))
            .count())
    }
}
