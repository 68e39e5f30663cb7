//! Integration tests for mf-graph.

use mf_graph::validate::{check_capacity_bounds, check_pairing};
use mf_graph::{GraphError, NetworkBuilder, ResidualNetwork};
use proptest::prelude::*;

#[test]
fn insertion_order_is_preserved() {
    // 0 -> 1, 0 -> 2, 0 -> 1 (parallel), 2 -> 0
    let net = NetworkBuilder::from_edges(3, [(0, 1, 3), (0, 2, 1), (0, 1, 4), (2, 0, 2)])
        .build()
        .unwrap();

    let n0 = net.node(0).unwrap();
    let targets: Vec<u32> = net.edges(n0).iter().map(|e| e.to().index()).collect();
    // Three forward edges plus the reverse companion of 2 -> 0, in order.
    assert_eq!(targets, vec![1, 2, 1, 2]);
    let forward: Vec<bool> = net.edges(n0).iter().map(|e| e.is_forward()).collect();
    assert_eq!(forward, vec![true, true, true, false]);

    // Parallel edges stay distinct.
    let caps: Vec<i64> = net
        .forward_edges()
        .iter()
        .map(|&r| net.edge(r).unwrap().capacity())
        .collect();
    assert_eq!(caps, vec![3, 1, 4, 2]);
}

#[test]
fn direct_insertion_matches_builder() {
    let mut direct = ResidualNetwork::new(2).unwrap();
    let (a, b) = (direct.node(0).unwrap(), direct.node(1).unwrap());
    direct.add_edge(a, b, 5).unwrap();

    let built = NetworkBuilder::from_edges(2, [(0, 1, 5)]).build().unwrap();
    for node in direct.nodes() {
        assert_eq!(direct.edges(node), built.edges(node));
    }
}

#[test]
fn zero_capacity_edge_is_kept_but_never_traversable() {
    let net = NetworkBuilder::from_edges(2, [(0, 1, 0)]).build().unwrap();
    let edge = net.edge(net.forward_edges()[0]).unwrap();
    assert_eq!(edge.capacity(), 0);
    assert_eq!(edge.residual_capacity(), 0);
}

#[test]
fn negative_capacity_is_an_invalid_argument() {
    let err = NetworkBuilder::from_edges(2, [(0, 1, -3)])
        .build()
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err,
        GraphError::NegativeCapacity {
            from: 0,
            to: 1,
            capacity: -3
        }
    );
}

proptest! {
    #[test]
    fn every_edge_is_paired(
        edges in prop::collection::vec((0u32..6, 0u32..6, 0i64..50), 0..40)
    ) {
        let net = NetworkBuilder::from_edges(6, edges.clone()).build().unwrap();
        prop_assert_eq!(net.edge_count(), edges.len());
        let total: usize = net.nodes().map(|v| net.edges(v).len()).sum();
        prop_assert_eq!(total, 2 * edges.len());
        prop_assert!(check_pairing(&net).is_ok());
        prop_assert!(check_capacity_bounds(&net).is_ok());
    }
}
