//! Selection algorithms.
//!
//! - [`classify`] shrinks a face selection to its inner edges, optionally
//!   keeping the caps of straight strips
//! - [`ring_edges`] keeps the selected edges that can form a ring through a
//!   shared face
//! - [`reconcile`] turns a subdivision report back into an edge selection
//!
//! All of them read the mesh through a [`Topology`](crate::mesh::Topology)
//! view and never change it.

mod classify;
mod reconcile;
mod ring;
mod scratch;

pub use classify::classify;
pub use reconcile::reconcile;
pub use ring::ring_edges;
