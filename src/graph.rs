//! The storage-agnostic graph capability and its shared plumbing.
//!
//! A graph here is a fixed set of vertices `0..n` plus a mutable set of
//! directed, optionally costed edges. Two back-ends implement the capability:
//! - [`DenseGraph`]: an eagerly allocated n×n cost matrix
//! - [`SparseGraph`]: lazily allocated per-vertex adjacency maps
//!
//! Both are constructed directly or through [`new_graph`], which selects a
//! back-end at runtime and screens externally supplied sizes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::dense::DenseGraph;
use crate::error::{GraphError, GraphResult};
use crate::sparse::SparseGraph;

/// A directed edge together with its optional cost.
///
/// `cost` is `None` for an unweighted edge. Absence of an edge is never
/// encoded here; an `Edge` only ever describes an edge that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub from: usize,
    /// Target vertex.
    pub to: usize,
    /// Explicit cost, or `None` for an unweighted edge.
    pub cost: Option<i32>,
}

/// Selects a storage back-end at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// n×n matrix storage, Θ(n²) space, O(1) edge queries.
    Dense,
    /// Per-vertex adjacency maps, Θ(n + m) space.
    Sparse,
}

/// Operations every storage back-end supports.
///
/// Vertex indices are `usize` values in `[0, vertex_count())`; any operation
/// receiving an index at or beyond the count fails with
/// [`GraphError::InvalidVertex`] before touching the graph. Edges are
/// directed; self-loops are permitted. Overwriting an existing edge never
/// changes [`edge_count`](Graph::edge_count).
///
/// The trait is object-safe: [`new_graph`] hands out `Box<dyn Graph>`, and
/// the traversal functions accept `?Sized` implementors.
pub trait Graph: fmt::Display {
    /// Number of vertices, fixed at construction. O(1).
    fn vertex_count(&self) -> usize;

    /// Current number of directed edges. O(1).
    fn edge_count(&self) -> usize;

    /// Out-degree of `v`.
    ///
    /// O(1) for the sparse back-end; the dense back-end scans the row.
    fn out_degree(&self, v: usize) -> GraphResult<usize>;

    /// A lazy sequence of the distinct direct successors of `v`, in
    /// back-end-defined order. Exhaustion is signaled by `None` from `next`,
    /// per the native iterator contract.
    ///
    /// The dense back-end scans its row on demand; the sparse back-end
    /// snapshots the neighbor set when the iterator is created, and later
    /// mutations have unspecified effect on a live snapshot.
    fn neighbors(&self, v: usize) -> GraphResult<Box<dyn Iterator<Item = usize> + '_>>;

    /// Whether the directed edge `from -> to` is present. O(1).
    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool>;

    /// The stored cost of `from -> to`: `Some(c)` for an explicit cost,
    /// `None` for an unweighted edge *or* an absent edge. Pair with
    /// [`has_edge`](Graph::has_edge) to tell those apart. O(1).
    fn cost(&self, from: usize, to: usize) -> GraphResult<Option<i32>>;

    /// Inserts the unweighted edge `from -> to`, overwriting any stored cost.
    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()>;

    /// Inserts `from -> to` with an explicit non-negative cost, overwriting
    /// any previous cost. Fails with [`GraphError::InvalidCost`] when `cost`
    /// is negative.
    fn add_edge_with_cost(&mut self, from: usize, to: usize, cost: i32) -> GraphResult<()>;

    /// Inserts unweighted edges in both directions. `v == w` inserts the
    /// single self-loop once, not twice.
    fn add_bi(&mut self, v: usize, w: usize) -> GraphResult<()>;

    /// Inserts costed edges in both directions; the self-loop case inserts
    /// once.
    fn add_bi_with_cost(&mut self, v: usize, w: usize, cost: i32) -> GraphResult<()>;

    /// Deletes `from -> to` if present. Removing an absent edge is a no-op,
    /// not an error.
    fn remove_edge(&mut self, from: usize, to: usize) -> GraphResult<()>;

    /// Deletes the edges between `v` and `w` in both directions; a self-loop
    /// is removed once.
    fn remove_bi(&mut self, v: usize, w: usize) -> GraphResult<()>;
}

/// Constructs a graph of the requested kind and size.
///
/// This is the boundary where externally supplied (possibly negative)
/// integers enter the crate: a negative `size` fails with
/// [`GraphError::InvalidSize`] for both kinds identically, and no partially
/// constructed graph escapes.
pub fn new_graph(kind: GraphKind, size: i64) -> GraphResult<Box<dyn Graph>> {
    let vertices = usize::try_from(size).map_err(|_| GraphError::InvalidSize(size))?;
    Ok(match kind {
        GraphKind::Dense => Box::new(DenseGraph::with_vertices(vertices)?),
        GraphKind::Sparse => Box::new(SparseGraph::with_vertices(vertices)),
    })
}

/// Materializes the full edge set of `graph`, in back-end iteration order.
///
/// Intended for diagnostics and cross-back-end comparison; costs ride along
/// so the result round-trips everything `Display` prints.
pub fn edges<G: Graph + ?Sized>(graph: &G) -> GraphResult<Vec<Edge>> {
    let mut out = Vec::with_capacity(graph.edge_count());
    for from in 0..graph.vertex_count() {
        for to in graph.neighbors(from)? {
            out.push(Edge {
                from,
                to,
                cost: graph.cost(from, to)?,
            });
        }
    }
    Ok(out)
}

/// Fails with [`GraphError::InvalidVertex`] unless `v < vertices`.
pub(crate) fn check_vertex(v: usize, vertices: usize) -> GraphResult<()> {
    if v >= vertices {
        return Err(GraphError::InvalidVertex {
            vertex: v,
            vertices,
        });
    }
    Ok(())
}

/// Checks both endpoints of an edge operation, `v` first.
pub(crate) fn check_vertex_pair(v: usize, w: usize, vertices: usize) -> GraphResult<()> {
    check_vertex(v, vertices)?;
    check_vertex(w, vertices)
}

/// Fails with [`GraphError::InvalidCost`] for a negative explicit cost.
pub(crate) fn check_cost(cost: i32) -> GraphResult<()> {
    if cost < 0 {
        return Err(GraphError::InvalidCost(cost));
    }
    Ok(())
}

/// Writes the brace-delimited edge listing both back-ends use for `Display`:
/// `(from,to)` for unweighted edges, `(from,to,cost)` otherwise, joined by
/// `", "`, with `{}` for an empty graph.
pub(crate) fn fmt_edge_list<I>(f: &mut fmt::Formatter<'_>, edges: I) -> fmt::Result
where
    I: Iterator<Item = Edge>,
{
    f.write_str("{")?;
    let mut first = true;
    for edge in edges {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        match edge.cost {
            None => write!(f, "({},{})", edge.from, edge.to)?,
            Some(cost) => write!(f, "({},{},{})", edge.from, edge.to, cost)?,
        }
    }
    f.write_str("}")
}
