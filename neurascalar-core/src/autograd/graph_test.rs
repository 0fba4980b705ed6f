use super::*;
use std::collections::HashMap;

fn position_map(order: &[Scalar]) -> HashMap<NodeId, usize> {
    order.iter().enumerate().map(|(i, n)| (n.id(), i)).collect()
}

fn assert_children_first(order: &[Scalar]) {
    let positions = position_map(order);
    for (i, node) in order.iter().enumerate() {
        for child in node.children() {
            let child_pos = positions[&child.id()];
            assert!(child_pos < i, "child at {} must precede parent at {}", child_pos, i);
        }
    }
}

#[test]
fn test_single_leaf() {
    let a = Scalar::new(1.0);
    let order = topological_sort(&a);
    assert_eq!(order.len(), 1);
    assert_eq!(order[0].id(), a.id());
}

#[test]
fn test_root_is_last_and_children_first() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(-3.0);
    let c = Scalar::new(10.0);
    let d = &a * &b + &c;

    let order = topological_sort(&d);
    assert_eq!(order.len(), 5);
    assert_eq!(order.last().map(Scalar::id), Some(d.id()));
    assert_children_first(&order);
}

#[test]
fn test_fan_out_node_visited_once() {
    let x = Scalar::new(1.5);
    let p1 = &x * 2.0;
    let p2 = x.exp();
    let out = &p1 + &p2;

    let order = topological_sort(&out);
    let occurrences = order.iter().filter(|n| n.id() == x.id()).count();
    assert_eq!(occurrences, 1);
    assert_children_first(&order);
}

#[test]
fn test_diamond_with_self_multiplication() {
    let a = Scalar::new(3.0);
    let sq = &a * &a;
    let out = (&sq + &a).tanh();

    let order = topological_sort(&out);
    // a, sq, sq + a, tanh
    assert_eq!(order.len(), 4);
    assert_children_first(&order);
}

#[test]
fn test_long_chain_does_not_overflow_stack() {
    let x = Scalar::new(0.001);
    let mut acc = x.clone();
    for _ in 0..50_000 {
        acc = &acc + &x;
    }
    let order = topological_sort(&acc);
    // x plus 50_000 adds
    assert_eq!(order.len(), 50_001);
}

#[test]
fn test_trace_edges_are_deduplicated() {
    let a = Scalar::new(3.0).with_label("a");
    let sq = &a * &a;
    let (nodes, edges) = trace(&sq);

    assert_eq!(nodes.len(), 2);
    assert_eq!(edges, vec![(a.id(), sq.id())]);
}

#[test]
fn test_trace_collects_every_edge() {
    let a = Scalar::new(-2.0);
    let b = Scalar::new(3.0);
    let d = &a * &b + (&a + &b) * &b;
    let (nodes, edges) = trace(&d);

    // a, b, a*b, a+b, (a+b)*b, d
    assert_eq!(nodes.len(), 6);
    // a*b: 2, a+b: 2, (a+b)*b: 2, d: 2
    assert_eq!(edges.len(), 8);
    assert!(edges.iter().all(|(_, parent)| *parent != a.id() && *parent != b.id()));
}
