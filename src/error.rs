//! Error types for ringcut.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

use crate::mesh::{EdgeId, FaceId, LoopId};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has fewer than three vertices or repeats a vertex.
    #[error("face {face} is degenerate ({reason})")]
    DegenerateFace {
        /// The face index.
        face: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Two loops were expected to bound the same face but do not.
    #[error("loops {from:?} and {to:?} are not co-facial")]
    LoopsNotCofacial {
        /// Loop the walk started from.
        from: LoopId,
        /// Loop that was never reached.
        to: LoopId,
    },

    /// A face or radial cycle did not close within its step cap.
    #[error("traversal around {element} did not close within {limit} steps")]
    TraversalLimit {
        /// Description of the element being walked.
        element: String,
        /// The step cap that was exceeded.
        limit: usize,
    },

    /// An edge has no faces where the operation needs at least one.
    #[error("edge {0:?} is not used by any face")]
    WireEdge(EdgeId),

    /// Two vertices do not share a face that could be split between them.
    #[error("no face split from {face:?} contains both cut vertices")]
    NoSplitFace {
        /// The face the split was planned on.
        face: FaceId,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid mesh state for the requested operation.
    #[error("invalid mesh state: {0}")]
    InvalidState(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MeshError::LoopsNotCofacial {
            from: LoopId::new(1),
            to: LoopId::new(7),
        };
        assert_eq!(err.to_string(), "loops L(1) and L(7) are not co-facial");

        let err = MeshError::invalid_param("cuts", 0, "must be at least 1");
        assert_eq!(err.to_string(), "invalid parameter: cuts = 0 (must be at least 1)");
    }
}
