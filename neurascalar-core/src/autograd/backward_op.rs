use std::fmt;

/// The operator that produced a node, i.e. the rule used to propagate the
/// node's gradient onto its children during the backward pass.
///
/// Composite operators are not represented here: negation is a `Mul` by a
/// `-1.0` constant, subtraction an `Add` of a negation, division a `Mul` by a
/// `Pow { exponent: -1.0 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Input or constant. Propagation is a no-op.
    Leaf,
    Add,
    Mul,
    /// `base ^ exponent`; the exponent is a plain number, never a node.
    Pow { exponent: f64 },
    Exp,
    Tanh,
}

impl BackwardOp {
    /// Number of children a node tagged with this operator has.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. } | BackwardOp::Exp | BackwardOp::Tanh => 1,
        }
    }

    /// Short symbol used when printing nodes that carry no label.
    pub fn symbol(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "leaf",
            BackwardOp::Add => "+",
            BackwardOp::Mul => "*",
            BackwardOp::Pow { .. } => "pow",
            BackwardOp::Exp => "exp",
            BackwardOp::Tanh => "tanh",
        }
    }

    /// Computes d(output)/d(input_i) for each input of this operator.
    ///
    /// `output` is the node's own forward value and `inputs` the forward values
    /// of its children, in child order. Entry `i` of the result belongs to
    /// child `i`; entries past `arity()` are zero. The caller multiplies each
    /// entry by the node's accumulated gradient (chain rule).
    pub fn local_grads(&self, output: f64, inputs: &[f64]) -> [f64; 2] {
        debug_assert_eq!(
            inputs.len(),
            self.arity(),
            "'{}' node propagated with {} inputs",
            self,
            inputs.len()
        );
        match (self, inputs) {
            (BackwardOp::Add, [_, _]) => [1.0, 1.0],
            (BackwardOp::Mul, [a, b]) => [*b, *a],
            (BackwardOp::Pow { exponent }, [base]) => {
                [exponent * base.powf(exponent - 1.0), 0.0]
            }
            (BackwardOp::Exp, [_]) => [output, 0.0],
            (BackwardOp::Tanh, [_]) => [1.0 - output * output, 0.0],
            _ => [0.0, 0.0],
        }
    }

    /// Display label for a node built by this operator from operands with the
    /// given labels, e.g. `(a * b)` or `tanh(a)`.
    ///
    /// `None` as soon as one operand is unlabeled.
    pub fn compose_label(&self, operands: &[Option<String>]) -> Option<String> {
        match (self, operands) {
            (BackwardOp::Add, [Some(a), Some(b)]) => Some(format!("({} + {})", a, b)),
            (BackwardOp::Mul, [Some(a), Some(b)]) => Some(format!("({} * {})", a, b)),
            (BackwardOp::Pow { exponent }, [Some(a)]) => Some(format!("{}^{}", a, exponent)),
            (BackwardOp::Exp, [Some(a)]) => Some(format!("exp({})", a)),
            (BackwardOp::Tanh, [Some(a)]) => Some(format!("tanh({})", a)),
            _ => None,
        }
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Pow { exponent } => write!(f, "pow({})", exponent),
            other => f.write_str(other.symbol()),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
