//! Property tests: both back-ends are observationally equivalent under any
//! sequence of edge operations, and the component analysis is a partition.

use std::collections::HashSet;

use proptest::prelude::*;

use spoke::{connected_components, edges, DenseGraph, Edge, Graph, SparseGraph};

const VERTICES: usize = 8;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(usize, usize),
    AddCost(usize, usize, i32),
    AddBi(usize, usize),
    AddBiCost(usize, usize, i32),
    Remove(usize, usize),
    RemoveBi(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let v = 0..VERTICES;
    let w = 0..VERTICES;
    let c = 0..100i32;
    prop_oneof![
        (v.clone(), w.clone()).prop_map(|(v, w)| Op::Add(v, w)),
        (v.clone(), w.clone(), c.clone()).prop_map(|(v, w, c)| Op::AddCost(v, w, c)),
        (v.clone(), w.clone()).prop_map(|(v, w)| Op::AddBi(v, w)),
        (v.clone(), w.clone(), c).prop_map(|(v, w, c)| Op::AddBiCost(v, w, c)),
        (v.clone(), w.clone()).prop_map(|(v, w)| Op::Remove(v, w)),
        (v, w).prop_map(|(v, w)| Op::RemoveBi(v, w)),
    ]
}

fn apply(graph: &mut dyn Graph, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::Add(v, w) => graph.add_edge(v, w).unwrap(),
            Op::AddCost(v, w, c) => graph.add_edge_with_cost(v, w, c).unwrap(),
            Op::AddBi(v, w) => graph.add_bi(v, w).unwrap(),
            Op::AddBiCost(v, w, c) => graph.add_bi_with_cost(v, w, c).unwrap(),
            Op::Remove(v, w) => graph.remove_edge(v, w).unwrap(),
            Op::RemoveBi(v, w) => graph.remove_bi(v, w).unwrap(),
        }
    }
}

proptest! {
    #[test]
    fn backends_agree_on_the_edge_set(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut dense = DenseGraph::with_vertices(VERTICES).unwrap();
        let mut sparse = SparseGraph::with_vertices(VERTICES);
        apply(&mut dense, &ops);
        apply(&mut sparse, &ops);

        prop_assert_eq!(dense.edge_count(), sparse.edge_count());

        let d: HashSet<Edge> = edges(&dense).unwrap().into_iter().collect();
        let s: HashSet<Edge> = edges(&sparse).unwrap().into_iter().collect();
        prop_assert_eq!(&d, &s);
        prop_assert_eq!(d.len(), dense.edge_count());

        for from in 0..VERTICES {
            prop_assert_eq!(
                dense.out_degree(from).unwrap(),
                sparse.out_degree(from).unwrap()
            );
            for to in 0..VERTICES {
                prop_assert_eq!(
                    dense.has_edge(from, to).unwrap(),
                    sparse.has_edge(from, to).unwrap()
                );
                prop_assert_eq!(dense.cost(from, to).unwrap(), sparse.cost(from, to).unwrap());
            }
        }
    }

    #[test]
    fn components_partition_the_vertex_set(ops in proptest::collection::vec(op_strategy(), 0..48)) {
        let mut dense = DenseGraph::with_vertices(VERTICES).unwrap();
        let mut sparse = SparseGraph::with_vertices(VERTICES);
        apply(&mut dense, &ops);
        apply(&mut sparse, &ops);

        for graph in [&dense as &dyn Graph, &sparse as &dyn Graph] {
            let components = connected_components(graph).unwrap();
            let mut all: Vec<usize> = components.iter().flatten().copied().collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..VERTICES).collect::<Vec<usize>>());
            prop_assert_eq!(components.sizes().sum::<usize>(), VERTICES);
            prop_assert!(components.count() >= 1);
        }
    }
}
