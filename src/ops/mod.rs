//! Editor operators.
//!
//! Operators are the user-facing entry points. Each one checks [`poll`], opens
//! an [`EditSession`] on the object, runs its algorithm and converts any error
//! into a [`Report`] on the returned [`OperatorOutcome`]. Errors never escape
//! an operator and the session is always released.
//!
//! - [`deselect_boundary`] shrinks a face selection to its inner edges
//! - [`connect`] cuts through the selection and selects the new edges
//!
//! # Example
//!
//! ```
//! use ringcut::mesh::{quad_grid, FaceId, SelectMode};
//! use ringcut::ops::{deselect_boundary, DeselectBoundaryOptions, EditSession, MeshObject};
//!
//! let mut object = MeshObject::new("strip", quad_grid(4, 1).unwrap());
//! object.enter_edit_mode();
//! {
//!     let mut mesh = EditSession::open(&mut object);
//!     mesh.select_mode = SelectMode::FACE;
//!     for f in 0..4 {
//!         mesh.select_face(FaceId::new(f));
//!     }
//! }
//!
//! let outcome = deselect_boundary(&mut object, &DeselectBoundaryOptions::default());
//! assert!(outcome.is_finished());
//! assert_eq!(object.mesh().selected_edges().count(), 3);
//! ```

mod connect;
mod deselect;
mod session;

pub use connect::{connect, cut_edges, ConnectOptions, MAX_CUTS};
pub use deselect::{deselect_boundary, DeselectBoundaryOptions};
pub use session::{EditSession, MeshObject, ObjectMode};

use crate::error::MeshError;
use crate::mesh::{EdgeId, PolyMesh, SelectMode};

/// Whether operators can run on `object`.
pub fn poll(object: &MeshObject) -> bool {
    object.mode() == ObjectMode::Edit
}

/// How an operator call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// The operator ran. Check the reports for errors.
    Finished,
    /// Nothing was done.
    Cancelled,
}

/// Severity of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    /// Informational message.
    Info,
    /// A failure surfaced to the user.
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity.
    pub level: ReportLevel,
    /// Message text.
    pub message: String,
}

/// Result of an operator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorOutcome {
    /// Final status.
    pub status: OperatorStatus,
    /// Messages produced during the call.
    pub reports: Vec<Report>,
}

impl OperatorOutcome {
    fn new(status: OperatorStatus) -> Self {
        Self {
            status,
            reports: Vec::new(),
        }
    }

    pub(crate) fn finished() -> Self {
        Self::new(OperatorStatus::Finished)
    }

    pub(crate) fn cancelled() -> Self {
        Self::new(OperatorStatus::Cancelled)
    }

    pub(crate) fn with_info(mut self, message: String) -> Self {
        log::info!("{}", message);
        self.reports.push(Report {
            level: ReportLevel::Info,
            message,
        });
        self
    }

    pub(crate) fn with_error(mut self, err: &MeshError) -> Self {
        log::error!("{}", err);
        self.reports.push(Report {
            level: ReportLevel::Error,
            message: err.to_string(),
        });
        self
    }

    /// Whether the operator finished.
    pub fn is_finished(&self) -> bool {
        self.status == OperatorStatus::Finished
    }

    /// Messages of error reports.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.reports
            .iter()
            .filter(|r| r.level == ReportLevel::Error)
            .map(|r| r.message.as_str())
    }
}

/// Replace the selection with `edges` in edge select mode.
fn select_edges_only(mesh: &mut PolyMesh, edges: &[EdgeId]) {
    mesh.select_all(false);
    mesh.select_mode = SelectMode::EDGE;
    for &e in edges {
        mesh.select_edge(e);
    }
}
