//! Error taxonomy shared by both storage back-ends.
//!
//! Every failure is detected before any mutation takes place, so an `Err`
//! return always leaves the graph exactly as it was.

use thiserror::Error;

/// Result alias used across the crate.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by graph construction, mutation, and queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The requested vertex count cannot back a graph: negative, or so large
    /// that the dense back-end's cell table could not be addressed.
    #[error("invalid graph size: {0}")]
    InvalidSize(i64),

    /// A vertex index at or beyond the graph's fixed vertex count.
    #[error("vertex {vertex} out of range for a graph with {vertices} vertices")]
    InvalidVertex {
        /// The offending index.
        vertex: usize,
        /// The graph's fixed vertex count.
        vertices: usize,
    },

    /// An explicit edge cost below zero.
    #[error("invalid edge cost: {0}")]
    InvalidCost(i32),
}
