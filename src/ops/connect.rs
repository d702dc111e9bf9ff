//! Connect operator.

use crate::algo::subdivide::{CornerType, EdgeSubdivider, SubdivideOptions};
use crate::error::{MeshError, Result};
use crate::mesh::{EdgeId, PolyMesh, Topology};
use crate::select::{classify, reconcile, ring_edges};

use super::{poll, select_edges_only, EditSession, MeshObject, OperatorOutcome};

/// Largest accepted number of cuts.
pub const MAX_CUTS: usize = 100;

/// Options for [`connect`].
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Number of cuts per edge, `1..=MAX_CUTS`.
    pub cuts: usize,

    /// Leave faces on the selection boundary as n-gons instead of
    /// tessellating them.
    pub boundary_ngons: bool,

    /// Pattern for quads cut on two adjacent sides.
    pub corner: CornerType,

    /// Fill fully enclosed quads with a grid.
    pub grid_fill: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            cuts: 1,
            boundary_ngons: true,
            corner: CornerType::StraightCut,
            grid_fill: true,
        }
    }
}

impl ConnectOptions {
    /// Set the number of cuts.
    pub fn with_cuts(mut self, cuts: usize) -> Self {
        self.cuts = cuts;
        self
    }

    /// Set whether boundary faces stay n-gons.
    pub fn with_boundary_ngons(mut self, boundary_ngons: bool) -> Self {
        self.boundary_ngons = boundary_ngons;
        self
    }

    /// Set the quad corner pattern.
    pub fn with_corner(mut self, corner: CornerType) -> Self {
        self.corner = corner;
        self
    }

    /// Set whether enclosed quads are grid filled.
    pub fn with_grid_fill(mut self, grid_fill: bool) -> Self {
        self.grid_fill = grid_fill;
        self
    }

    /// Check the option ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CUTS).contains(&self.cuts) {
            return Err(MeshError::invalid_param(
                "cuts",
                self.cuts,
                "must be between 1 and 100",
            ));
        }
        Ok(())
    }

    /// The subdivision options these settings map to.
    pub fn subdivide_options(&self) -> SubdivideOptions {
        SubdivideOptions::new(self.cuts)
            .with_grid_fill(self.grid_fill)
            .with_single_edge(!self.boundary_ngons)
            .with_corner(self.corner)
    }
}

/// Edges to cut for the current selection.
///
/// In face select mode these are the inner edges of the face selection, caps
/// included. Otherwise they are the selected edges that form rings.
pub fn cut_edges(mesh: &PolyMesh) -> Result<Vec<EdgeId>> {
    let topo = Topology::new(mesh);
    let selected: Vec<EdgeId> = mesh.selected_edges().collect();
    if mesh.select_mode.face {
        classify(&topo, &selected, true)
    } else {
        ring_edges(&topo, &selected)
    }
}

/// Cut through the selection and select the new edges.
///
/// Selected faces are cut across their inner edges. Selected edge rings are
/// cut through the faces between them. Afterwards the edges created inside
/// the cut region are selected in edge select mode.
///
/// Cancels if the object is not in edit mode, the options are out of range
/// or there is nothing to cut. A subdivision failure is reported and leaves
/// nothing selected.
pub fn connect<S>(
    object: &mut MeshObject,
    options: &ConnectOptions,
    subdivider: &S,
) -> OperatorOutcome
where
    S: EdgeSubdivider + ?Sized,
{
    if !poll(object) {
        return OperatorOutcome::cancelled();
    }
    if let Err(err) = options.validate() {
        return OperatorOutcome::cancelled().with_error(&err);
    }

    let mut session = EditSession::open(object);
    let edges = match cut_edges(&session) {
        Ok(edges) => edges,
        Err(err) => return OperatorOutcome::finished().with_error(&err),
    };
    if edges.is_empty() {
        return OperatorOutcome::cancelled();
    }

    let result = subdivider.subdivide(&mut session, &edges, &options.subdivide_options());
    match result {
        Ok(report) => {
            let selected = reconcile(&session, &report);
            select_edges_only(&mut session, &selected);
            OperatorOutcome::finished().with_info(format!(
                "cut {} edges, {} edges selected",
                edges.len(),
                selected.len()
            ))
        }
        Err(err) => {
            select_edges_only(&mut session, &[]);
            OperatorOutcome::finished().with_error(&err)
        }
    }
}
