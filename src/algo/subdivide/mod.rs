//! Selective edge subdivision.
//!
//! This module defines the contract between the selection operators and the
//! primitive that actually cuts geometry, plus a built-in implementation.
//!
//! # Contract
//!
//! An [`EdgeSubdivider`] receives a set of edges and a [`SubdivideOptions`]
//! and splits every edge into `cuts + 1` segments, then connects the new
//! vertices across the faces that use those edges. It reports what it created
//! in a [`SubdivideReport`]:
//!
//! - `split_edges`: every segment of an input edge
//! - `inner_vertices`: every vertex it introduced
//! - `inner_edges`: every edge it introduced that is not a segment of an input
//!   edge
//!
//! # Face Patterns
//!
//! [`RingSubdivider`] fills each affected face according to which of its sides
//! were cut:
//!
//! | Cut sides | Face | Result |
//! |-----------|------|--------|
//! | two, opposite | even rank | straight cuts across the face |
//! | four | quad, grid fill on | `(cuts + 1)²` grid |
//! | two, adjacent | quad | [`CornerType`] pattern |
//! | one | triangle or quad, single edge on | fan to the far corner(s) |
//! | anything else | any | the face keeps the new vertices as an n-gon |
//!
//! # Example
//!
//! ```
//! use ringcut::algo::subdivide::{EdgeSubdivider, RingSubdivider, SubdivideOptions};
//! use ringcut::mesh::{quad_grid, VertexId};
//!
//! let mut mesh = quad_grid(3, 1).unwrap();
//! // The four rungs of the strip.
//! let rungs: Vec<_> = (0..4)
//!     .map(|i| mesh.find_edge(VertexId::new(i), VertexId::new(i + 4)).unwrap())
//!     .collect();
//!
//! let report = RingSubdivider
//!     .subdivide(&mut mesh, &rungs, &SubdivideOptions::new(1))
//!     .unwrap();
//! assert_eq!(mesh.num_faces(), 6);
//! assert_eq!(report.inner_edges.len(), 3);
//! ```

mod fill;
mod ring;

pub use ring::RingSubdivider;

use crate::error::{MeshError, Result};
use crate::mesh::{EdgeId, PolyMesh, VertexId};

/// How a quad with two adjacent cut sides is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerType {
    /// Join each pair of cut vertices through a vertex on the corner diagonal,
    /// chain those vertices and join the outermost one to the opposite corner.
    /// Produces only quads.
    InnerVertex,
    /// Join each pair of cut vertices through a vertex on the corner diagonal.
    Path,
    /// Join every cut vertex to the opposite corner.
    Fan,
    /// Join each pair of cut vertices directly.
    #[default]
    StraightCut,
}

/// Options for edge subdivision.
#[derive(Debug, Clone)]
pub struct SubdivideOptions {
    /// Number of new vertices per input edge (at least 1).
    pub cuts: usize,

    /// Fill quads with all four sides cut with a grid.
    pub use_grid_fill: bool,

    /// Tessellate triangles and quads with exactly one cut side instead of
    /// leaving them as n-gons.
    pub use_single_edge: bool,

    /// Pattern for quads with two adjacent cut sides.
    pub corner: CornerType,
}

impl SubdivideOptions {
    /// Create options with the specified number of cuts.
    pub fn new(cuts: usize) -> Self {
        Self {
            cuts,
            use_grid_fill: true,
            use_single_edge: false,
            corner: CornerType::default(),
        }
    }

    /// Set whether enclosed quads are grid filled.
    pub fn with_grid_fill(mut self, grid_fill: bool) -> Self {
        self.use_grid_fill = grid_fill;
        self
    }

    /// Set whether single-edge faces are tessellated.
    pub fn with_single_edge(mut self, single_edge: bool) -> Self {
        self.use_single_edge = single_edge;
        self
    }

    /// Set the quad corner pattern.
    pub fn with_corner(mut self, corner: CornerType) -> Self {
        self.corner = corner;
        self
    }

    /// Check that the options can be executed.
    pub fn validate(&self) -> Result<()> {
        if self.cuts == 0 {
            return Err(MeshError::invalid_param("cuts", self.cuts, "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for SubdivideOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Geometry created by a subdivision pass.
#[derive(Debug, Clone, Default)]
pub struct SubdivideReport {
    /// Segments of the input edges, including the shortened originals.
    pub split_edges: Vec<EdgeId>,

    /// Vertices introduced by the pass.
    pub inner_vertices: Vec<VertexId>,

    /// Edges introduced inside faces.
    pub inner_edges: Vec<EdgeId>,
}

/// A primitive that cuts a set of edges and the faces around them.
pub trait EdgeSubdivider {
    /// Subdivide `edges` in `mesh` and report the created geometry.
    fn subdivide(
        &self,
        mesh: &mut PolyMesh,
        edges: &[EdgeId],
        options: &SubdivideOptions,
    ) -> Result<SubdivideReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = SubdivideOptions::new(3)
            .with_grid_fill(false)
            .with_single_edge(true)
            .with_corner(CornerType::Fan);
        assert_eq!(options.cuts, 3);
        assert!(!options.use_grid_fill);
        assert!(options.use_single_edge);
        assert_eq!(options.corner, CornerType::Fan);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_cuts_rejected() {
        assert!(matches!(
            SubdivideOptions::new(0).validate(),
            Err(MeshError::InvalidParameter { name: "cuts", .. })
        ));
    }
}
