//! # `spoke` - Fixed-Size Graphs with Interchangeable Storage
//!
//! A small graph toolkit built around one capability trait and two storage
//! back-ends chosen at construction time:
//!
//! - [`DenseGraph`]: an eagerly allocated n×n cost matrix. Θ(n²) space,
//!   O(1) edge updates and queries, row scans for neighbor iteration.
//! - [`SparseGraph`]: lazily allocated per-vertex adjacency maps. Θ(n + m)
//!   space, O(1) amortized updates and queries.
//!
//! On top of the trait sit a generic iterative depth-first traversal
//! ([`dfs`] and the lazy [`Dfs`] iterator) and a connected-components
//! analyzer ([`connected_components`]) that seeds one traversal per
//! undiscovered vertex.
//!
//! ## Design
//!
//! - **Fixed vertex set**: a graph is created with its final vertex count;
//!   vertices are dense `usize` indices in `[0, n)`. Edges are directed,
//!   may carry an optional non-negative cost, and may self-loop.
//! - **Tagged costs**: "edge present without a cost" is `None`, not a magic
//!   sentinel, so every legitimate cost value stays usable.
//! - **Validation before mutation**: every operation checks its indices (and
//!   cost sign) first and fails with a typed [`GraphError`] leaving the
//!   graph untouched.
//! - **Exclusive ownership**: mutation goes through `&mut self`; traversal
//!   visitors receive `&G` and thus cannot mutate the graph mid-walk.
//!
//! ## Example
//!
//! ```rust
//! use spoke::{connected_components, DenseGraph, Graph};
//!
//! let mut g = DenseGraph::with_vertices(4)?;
//! g.add_bi(0, 1)?;
//! g.add_bi(2, 3)?;
//!
//! let components = connected_components(&g)?;
//! assert_eq!(components.count(), 2);
//! assert_eq!(components.largest(), Some(2));
//! # Ok::<(), spoke::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod graph;
pub mod sparse;
pub mod visited;

pub use algorithms::{connected_components, dfs, ComponentSet, Dfs};
pub use dense::DenseGraph;
pub use error::{GraphError, GraphResult};
pub use graph::{edges, new_graph, Edge, Graph, GraphKind};
pub use sparse::SparseGraph;
pub use visited::VisitedSet;

// Compile-time layout checks for the types the matrix and Display paths
// copy around. Loose upper bounds to avoid platform brittleness.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Option<i32>>() <= mem::size_of::<u64>());
    assert!(mem::size_of::<Edge>() <= mem::size_of::<usize>() * 3);
};
