//! # ringcut
//!
//! Selection-driven cutting for polygon meshes.
//!
//! ringcut provides a loop-based polygon mesh with per-element selection and
//! two editor operators built on it:
//!
//! - **Deselect Boundary** shrinks a face selection to the edges inside it,
//!   optionally keeping the cap edges that close a straight strip of faces
//! - **Connect** cuts through selected faces (or selected edge rings) and
//!   selects the newly created edges
//!
//! ## Features
//!
//! - **Radial edge mesh**: n-gon faces and non-manifold edges, with every
//!   adjacency walk bounded
//! - **Boundary classification**: inner and strip-cap edges of a face selection
//! - **Edge subdivision**: even cuts with grid, corner and single-edge fills
//! - **File formats**: OBJ, PLY
//!
//! ## Quick Start
//!
//! ```
//! use ringcut::prelude::*;
//!
//! // A strip of four quads, all selected.
//! let mut mesh = quad_grid(4, 1).unwrap();
//! mesh.select_mode = SelectMode::FACE;
//! for f in 0..4 {
//!     mesh.select_face(FaceId::new(f));
//! }
//!
//! let mut object = MeshObject::new("strip", mesh);
//! object.enter_edit_mode();
//!
//! // Cut lengthwise through the strip.
//! let outcome = connect(&mut object, &ConnectOptions::default(), &RingSubdivider);
//! assert!(outcome.is_finished());
//!
//! let mesh = object.into_mesh();
//! assert_eq!(mesh.num_faces(), 8);
//! assert_eq!(mesh.selected_edges().count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod ops;
pub mod select;

/// Prelude module for convenient imports.
///
/// ```
/// use ringcut::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::subdivide::{CornerType, EdgeSubdivider, RingSubdivider};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_quads, build_from_triangles, quad_grid, EdgeId, FaceId,
        LoopId, PolyMesh, SelectMode, Topology, VertexId,
    };
    pub use crate::ops::{
        connect, deselect_boundary, ConnectOptions, DeselectBoundaryOptions, EditSession,
        MeshObject, OperatorStatus,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
