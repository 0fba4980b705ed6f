use neurascalar_core::Scalar;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn labeled_leaves(values: &[(&str, f64)]) -> Vec<Scalar> {
    values
        .iter()
        .map(|&(label, v)| Scalar::new(v).with_label(label))
        .collect()
}

/// Asserts the defining property of a topological order: every child of a
/// node appears strictly before it.
#[allow(dead_code)]
pub(crate) fn assert_topological(order: &[Scalar]) {
    for (i, node) in order.iter().enumerate() {
        for child in node.children() {
            let child_pos = order
                .iter()
                .position(|n| n.ptr_eq(&child))
                .expect("child missing from topological order");
            assert!(child_pos < i, "child at {} not before parent at {}", child_pos, i);
        }
    }
}
