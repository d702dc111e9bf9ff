//! Core mesh data structures.
//!
//! This module provides the polygon mesh representation used by the selection
//! operators and the subdivider.
//!
//! # Overview
//!
//! The primary type is [`PolyMesh`], a loop-based boundary representation in
//! which each edge keeps a radial cycle of the face corners that use it. Faces
//! may have any rank of three or more, and an edge may be shared by any number
//! of faces.
//!
//! [`Topology`] is a borrowed, read-only view over a mesh that exposes the
//! bounded adjacency walks the selection algorithms depend on.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an edge
//! - [`FaceId`] - Identifies a face
//! - [`LoopId`] - Identifies a face corner (half-edge)
//!
//! # Construction
//!
//! ```
//! use ringcut::mesh::build_from_quads;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
//! assert_eq!(mesh.face_rank(ringcut::mesh::FaceId::new(0)), 4);
//! ```

mod builder;
mod halfedge;
mod index;
mod topology;

pub use builder::{
    build_from_polygons, build_from_quads, build_from_triangles, quad_grid, to_face_vertex,
};
pub use halfedge::{
    Edge, Face, FaceLoopIter, Loop, PolyMesh, RadialLoopIter, SelectMode, Vertex,
    MAX_RADIAL_DEGREE,
};
pub use index::{EdgeId, FaceId, LoopId, VertexId};
pub use topology::Topology;
