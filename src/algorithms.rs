//! Depth-first traversal and connected-components analysis.
//!
//! The traversal is generic over the [`Graph`] trait, so both back-ends
//! share one engine. It comes in two shapes: a callback-driven [`dfs`] that
//! threads a caller-owned [`VisitedSet`] through repeated runs, and a lazy
//! [`Dfs`] iterator that owns its own state.

use crate::error::GraphResult;
use crate::graph::{check_vertex, Graph};
use crate::visited::VisitedSet;

/// Performs a depth-first walk from `start`, invoking `action` once per
/// newly visited vertex with the graph and the vertex index.
///
/// Flags already set in `visited` are honored: the walk never re-enters a
/// marked vertex, and a `start` that is already marked returns immediately
/// without invoking `action`. Repeated calls against the same set therefore
/// walk each component exactly once, which is what the component scan in
/// [`connected_components`] relies on.
///
/// The walk is iterative. Neighbors are pushed in reverse so they pop in
/// the order the back-end's iterator yields them, reproducing the visit
/// order of the recursive formulation while bounding memory by the
/// component size instead of the call stack. Self-loops and re-added edges
/// cannot cause a double visit.
///
/// # Panics
/// Panics if `visited` is not sized to `graph.vertex_count()` flags.
pub fn dfs<G, F>(graph: &G, start: usize, visited: &mut VisitedSet, mut action: F) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(&G, usize),
{
    let vertices = graph.vertex_count();
    assert!(
        visited.len() == vertices,
        "visited set holds {} flags for a graph with {vertices} vertices",
        visited.len()
    );
    check_vertex(start, vertices)?;

    let mut stack = vec![start];
    while let Some(v) = stack.pop() {
        if !visited.try_visit(v) {
            continue;
        }
        action(graph, v);

        let mut frontier: Vec<usize> = graph.neighbors(v)?.collect();
        frontier.reverse();
        stack.extend(frontier);
    }
    Ok(())
}

/// An iterator yielding vertices in depth-first order from a start vertex.
///
/// Owns its visited state, so exhausting it walks exactly the start
/// vertex's component. Created per traversal; it is not restartable.
pub struct Dfs<'g, G: Graph + ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<usize>,
}

impl<'g, G: Graph + ?Sized> Dfs<'g, G> {
    /// Creates an iterator rooted at `start`.
    pub fn new(graph: &'g G, start: usize) -> GraphResult<Self> {
        check_vertex(start, graph.vertex_count())?;
        Ok(Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack: vec![start],
        })
    }
}

impl<G: Graph + ?Sized> Iterator for Dfs<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(v) = self.stack.pop() {
            if !self.visited.try_visit(v) {
                continue;
            }
            let mut frontier: Vec<usize> = self
                .graph
                .neighbors(v)
                .expect("stack holds only in-range vertices")
                .collect();
            frontier.reverse();
            self.stack.extend(frontier);
            return Some(v);
        }
        None
    }
}

/// The connected components of a graph, in discovery order.
///
/// Component membership treats each stored edge in its stored direction;
/// callers wanting undirected connectivity add their edges with
/// [`Graph::add_bi`], as the bundled driver does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    components: Vec<Vec<usize>>,
}

impl ComponentSet {
    /// Number of components.
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// `true` when the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The size of each component, in discovery order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.components.iter().map(Vec::len)
    }

    /// The size of the largest component, or `None` for a vertex-free graph.
    pub fn largest(&self) -> Option<usize> {
        self.components.iter().map(Vec::len).max()
    }

    /// The member lists in discovery order; members appear in visit order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.components.iter().map(Vec::as_slice)
    }
}

/// Finds the connected components by seeding one depth-first walk per
/// not-yet-visited vertex, scanning vertices `0..n` in ascending order.
///
/// The ascending outer scan makes traversal starting points deterministic;
/// the visit order *within* a component follows the back-end's neighbor
/// order. Every vertex lands in exactly one component, and the component
/// count equals the number of seeded walks.
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> GraphResult<ComponentSet> {
    let vertices = graph.vertex_count();
    let mut visited = VisitedSet::new(vertices);
    let mut components = Vec::new();

    for v in 0..vertices {
        if visited.is_visited(v) {
            continue;
        }
        let mut members = Vec::new();
        dfs(graph, v, &mut visited, |_, u| members.push(u))?;
        tracing::trace!(seed = v, size = members.len(), "component discovered");
        components.push(members);
    }

    Ok(ComponentSet { components })
}
