//! Sparse adjacency-map storage.
//!
//! Each vertex owns at most one map from successor index to optional cost,
//! and the map is only allocated once the first edge out of that vertex is
//! added. Space is Θ(n + m).

use core::fmt;
use std::collections::HashMap;

use crate::error::GraphResult;
use crate::graph::{check_cost, check_vertex, check_vertex_pair, fmt_edge_list, Edge, Graph};

/// Maps allocated on first write start at this capacity.
const INITIAL_MAP_CAPACITY: usize = 4;

/// A graph with a fixed number of vertices backed by per-vertex adjacency
/// maps.
///
/// add/remove/query/degree are O(1) amortized. Neighbor iteration snapshots
/// the key set at iterator construction; see [`SparseNeighbors`].
pub struct SparseGraph {
    /// `adjacency[v]` maps each direct successor of `v` to its optional
    /// cost. A slot stays `None` until the first edge out of `v` is added.
    adjacency: Vec<Option<HashMap<usize, Option<i32>>>>,
    edges: usize,
}

impl SparseGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    ///
    /// Only the n-slot spine is allocated here; negative external sizes are
    /// screened at the [`new_graph`](crate::graph::new_graph) boundary.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            adjacency: vec![None; vertices],
            edges: 0,
        }
    }

    /// Inserts or overwrites an edge. Endpoints already validated.
    fn insert(&mut self, from: usize, to: usize, cost: Option<i32>) {
        let map = self.adjacency[from]
            .get_or_insert_with(|| HashMap::with_capacity(INITIAL_MAP_CAPACITY));
        if map.insert(to, cost).is_none() {
            self.edges += 1;
        }
    }

    /// Deletes an edge if present. Endpoints already validated.
    fn delete(&mut self, from: usize, to: usize) {
        if let Some(map) = self.adjacency[from].as_mut() {
            if map.remove(&to).is_some() {
                self.edges -= 1;
            }
        }
    }
}

/// Yields the direct successors of one vertex from a snapshot taken when
/// the iterator was created.
///
/// Mutating the graph after taking the snapshot does not feed back into a
/// live iterator, and callers must not rely on any particular interaction.
pub struct SparseNeighbors {
    keys: std::vec::IntoIter<usize>,
}

impl Iterator for SparseNeighbors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.keys.next()
    }
}

impl Graph for SparseGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn out_degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.adjacency.len())?;
        Ok(self.adjacency[v].as_ref().map_or(0, HashMap::len))
    }

    fn neighbors(&self, v: usize) -> GraphResult<Box<dyn Iterator<Item = usize> + '_>> {
        check_vertex(v, self.adjacency.len())?;
        let keys: Vec<usize> = match &self.adjacency[v] {
            Some(map) => map.keys().copied().collect(),
            None => Vec::new(),
        };
        Ok(Box::new(SparseNeighbors {
            keys: keys.into_iter(),
        }))
    }

    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        check_vertex_pair(from, to, self.adjacency.len())?;
        Ok(self.adjacency[from]
            .as_ref()
            .is_some_and(|map| map.contains_key(&to)))
    }

    fn cost(&self, from: usize, to: usize) -> GraphResult<Option<i32>> {
        check_vertex_pair(from, to, self.adjacency.len())?;
        Ok(self.adjacency[from]
            .as_ref()
            .and_then(|map| map.get(&to))
            .copied()
            .flatten())
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        check_vertex_pair(from, to, self.adjacency.len())?;
        self.insert(from, to, None);
        Ok(())
    }

    fn add_edge_with_cost(&mut self, from: usize, to: usize, cost: i32) -> GraphResult<()> {
        check_vertex_pair(from, to, self.adjacency.len())?;
        check_cost(cost)?;
        self.insert(from, to, Some(cost));
        Ok(())
    }

    fn add_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex_pair(v, w, self.adjacency.len())?;
        self.insert(v, w, None);
        if v != w {
            self.insert(w, v, None);
        }
        Ok(())
    }

    fn add_bi_with_cost(&mut self, v: usize, w: usize, cost: i32) -> GraphResult<()> {
        check_vertex_pair(v, w, self.adjacency.len())?;
        check_cost(cost)?;
        self.insert(v, w, Some(cost));
        if v != w {
            self.insert(w, v, Some(cost));
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        check_vertex_pair(from, to, self.adjacency.len())?;
        self.delete(from, to);
        Ok(())
    }

    fn remove_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex_pair(v, w, self.adjacency.len())?;
        self.delete(v, w);
        if v != w {
            self.delete(w, v);
        }
        Ok(())
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = self.adjacency.iter().enumerate().flat_map(|(from, slot)| {
            slot.iter()
                .flat_map(move |map| map.iter().map(move |(&to, &cost)| Edge { from, to, cost }))
        });
        fmt_edge_list(f, present)
    }
}
