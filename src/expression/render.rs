//! SQL text for expression trees.
//!
//! Every operand is parenthesized, so the output never depends on the
//! target engine's operator precedence.

use std::fmt;

use crate::expression::expr::{BinaryLogicalOperation, CastOperation, Expression};

impl fmt::Display for BinaryLogicalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {} ({})",
            self.left(),
            self.text_representation(),
            self.right()
        )
    }
}

impl fmt::Display for CastOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CAST({} AS {})", self.expr(), self.target().as_str())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::BinaryLogical(op) => write!(f, "{}", op),
            Expression::Cast(cast) => write!(f, "{}", cast),
        }
    }
}
