//! Mesh editing algorithms.
//!
//! - **Subdivision**: selective edge subdivision with face fill patterns
//!   ([`subdivide`])

pub mod subdivide;
