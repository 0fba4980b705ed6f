use crate::scalar::Scalar;
use std::collections::HashSet;

/// Stable identity of a graph node, derived from the address of its shared
/// storage. Two `Scalar` handles have the same `NodeId` iff they point to the
/// same node. Only meaningful while the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first, post-order: a node is appended only after all of its children
/// have been appended, so every node appears after all of its children and
/// `root` comes last. The visited set is keyed by [`NodeId`], so a node shared
/// by several parents appears exactly once.
///
/// Iterative rather than recursive so long chains (e.g. big sums) do not
/// exhaust the call stack.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Scalar> = Vec::new();
    // (node, children already scheduled)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let children = node.children();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for child in children.into_iter().rev() {
            if !visited.contains(&child.id()) {
                stack.push((child, false));
            }
        }
    }

    sorted_list
}

/// Read-only enumeration of the graph below `root`, for renderers and
/// inspection.
///
/// Returns the reachable nodes in topological order and the deduplicated
/// `(child, parent)` edges, in discovery order.
pub fn trace(root: &Scalar) -> (Vec<Scalar>, Vec<(NodeId, NodeId)>) {
    let nodes = topological_sort(root);
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        let parent_id = node.id();
        for child in node.children() {
            let edge = (child.id(), parent_id);
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    (nodes, edges)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
