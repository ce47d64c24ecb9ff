//! Dense adjacency-matrix storage.
//!
//! The whole n×n cell table is allocated at construction, so edge queries
//! and updates are single indexed accesses regardless of how many edges
//! exist. The price is Θ(n²) space and row scans for neighbor iteration.

use core::fmt;

use crate::error::{GraphError, GraphResult};
use crate::graph::{check_cost, check_vertex, check_vertex_pair, fmt_edge_list, Edge, Graph};

/// One cell of the adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// No edge between the two vertices.
    Absent,
    /// Edge present, carrying its optional cost.
    Edge(Option<i32>),
}

/// A graph with a fixed number of vertices backed by an n×n cost matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` / `remove_edge` | O(1) | single cell write |
/// | `has_edge` / `cost` | O(1) | single cell read |
/// | `out_degree` | O(n) | scans the row |
/// | `neighbors` | O(n) per full row | lazy scan, see [`DenseNeighbors`] |
/// | space | Θ(n²) | independent of edge count |
pub struct DenseGraph {
    /// Row-major cell table of length `vertices²`; `cells[from * n + to]`.
    cells: Vec<Cell>,
    vertices: usize,
    edges: usize,
}

impl DenseGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    ///
    /// Fails with [`GraphError::InvalidSize`] when the `vertices × vertices`
    /// cell table cannot be addressed in `usize`.
    pub fn with_vertices(vertices: usize) -> GraphResult<Self> {
        let len = vertices.checked_mul(vertices).ok_or_else(|| {
            GraphError::InvalidSize(i64::try_from(vertices).unwrap_or(i64::MAX))
        })?;
        Ok(Self {
            cells: vec![Cell::Absent; len],
            vertices,
            edges: 0,
        })
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.vertices + to
    }

    #[inline]
    fn row(&self, v: usize) -> &[Cell] {
        &self.cells[v * self.vertices..(v + 1) * self.vertices]
    }

    /// Inserts or overwrites an edge. Endpoints already validated.
    fn insert(&mut self, from: usize, to: usize, cost: Option<i32>) {
        let idx = self.index(from, to);
        if self.cells[idx] == Cell::Absent {
            self.edges += 1;
        }
        self.cells[idx] = Cell::Edge(cost);
    }

    /// Deletes an edge if present. Endpoints already validated.
    fn delete(&mut self, from: usize, to: usize) {
        let idx = self.index(from, to);
        if self.cells[idx] != Cell::Absent {
            self.cells[idx] = Cell::Absent;
            self.edges -= 1;
        }
    }
}

/// Lazily scans one matrix row, yielding the indices of present edges.
///
/// The cursor advances past absent cells on each call, so a full traversal
/// of a row costs O(n) while a single `next` may scan to the row's end when
/// edges are sparse within the dense row.
pub struct DenseNeighbors<'g> {
    row: &'g [Cell],
    next: usize,
}

impl Iterator for DenseNeighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.row.len() {
            let at = self.next;
            self.next += 1;
            if self.row[at] != Cell::Absent {
                return Some(at);
            }
        }
        None
    }
}

impl Graph for DenseGraph {
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn out_degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.vertices)?;
        Ok(self.row(v).iter().filter(|&&c| c != Cell::Absent).count())
    }

    fn neighbors(&self, v: usize) -> GraphResult<Box<dyn Iterator<Item = usize> + '_>> {
        check_vertex(v, self.vertices)?;
        Ok(Box::new(DenseNeighbors {
            row: self.row(v),
            next: 0,
        }))
    }

    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        check_vertex_pair(from, to, self.vertices)?;
        Ok(self.cells[self.index(from, to)] != Cell::Absent)
    }

    fn cost(&self, from: usize, to: usize) -> GraphResult<Option<i32>> {
        check_vertex_pair(from, to, self.vertices)?;
        Ok(match self.cells[self.index(from, to)] {
            Cell::Absent => None,
            Cell::Edge(cost) => cost,
        })
    }

    fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        check_vertex_pair(from, to, self.vertices)?;
        self.insert(from, to, None);
        Ok(())
    }

    fn add_edge_with_cost(&mut self, from: usize, to: usize, cost: i32) -> GraphResult<()> {
        check_vertex_pair(from, to, self.vertices)?;
        check_cost(cost)?;
        self.insert(from, to, Some(cost));
        Ok(())
    }

    fn add_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex_pair(v, w, self.vertices)?;
        self.insert(v, w, None);
        if v != w {
            self.insert(w, v, None);
        }
        Ok(())
    }

    fn add_bi_with_cost(&mut self, v: usize, w: usize, cost: i32) -> GraphResult<()> {
        check_vertex_pair(v, w, self.vertices)?;
        check_cost(cost)?;
        self.insert(v, w, Some(cost));
        if v != w {
            self.insert(w, v, Some(cost));
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        check_vertex_pair(from, to, self.vertices)?;
        self.delete(from, to);
        Ok(())
    }

    fn remove_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex_pair(v, w, self.vertices)?;
        self.delete(v, w);
        if v != w {
            self.delete(w, v);
        }
        Ok(())
    }
}

impl fmt::Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            match cell {
                Cell::Absent => None,
                Cell::Edge(cost) => Some(Edge {
                    from: idx / self.vertices,
                    to: idx % self.vertices,
                    cost: *cost,
                }),
            }
        });
        fmt_edge_list(f, present)
    }
}
