//! Expression tree definitions.

use crate::expression::operator::BinaryLogicalOperator;
use crate::random::Randomly;
use crate::value::{CastType, Constant};

/// `<left> AND|OR|XOR <right>` with a spelling fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryLogicalOperation {
    left: Box<Expression>,
    right: Box<Expression>,
    op: BinaryLogicalOperator,
    text_representation: &'static str,
}

impl BinaryLogicalOperation {
    /// Create an operation, choosing one of the operator's spellings.
    ///
    /// The choice is made once here so that rendering the same node
    /// always produces the same SQL.
    pub fn new(
        left: Expression,
        right: Expression,
        op: BinaryLogicalOperator,
        randomly: &mut Randomly,
    ) -> Self {
        let text_representation = *randomly.from_options(op.spellings());
        log::trace!("{:?} spelled as {}", op, text_representation);
        Self {
            left: Box::new(left),
            right: Box::new(right),
            op,
            text_representation,
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }

    pub fn op(&self) -> BinaryLogicalOperator {
        self.op
    }

    pub fn text_representation(&self) -> &'static str {
        self.text_representation
    }
}

/// `CAST(<expr> AS <type>)`
#[derive(Debug, Clone, PartialEq)]
pub struct CastOperation {
    expr: Box<Expression>,
    target: CastType,
}

impl CastOperation {
    pub fn new(expr: Expression, target: CastType) -> Self {
        Self {
            expr: Box::new(expr),
            target,
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn target(&self) -> CastType {
        self.target
    }
}

/// Expression tree node
///
/// Each node owns its children; trees are built once and never changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(Constant),
    BinaryLogical(BinaryLogicalOperation),
    Cast(CastOperation),
}

impl Expression {
    /// Create a constant expression
    pub fn constant(value: Constant) -> Self {
        Expression::Constant(value)
    }

    /// Create a logical operation, choosing its spelling from `randomly`
    pub fn binary_logical(
        op: BinaryLogicalOperator,
        left: Expression,
        right: Expression,
        randomly: &mut Randomly,
    ) -> Self {
        Expression::BinaryLogical(BinaryLogicalOperation::new(left, right, op, randomly))
    }

    pub fn cast(expr: Expression, target: CastType) -> Self {
        Expression::Cast(CastOperation::new(expr, target))
    }

    /// Number of levels in the tree, a constant has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expression::Constant(_) => 1,
            Expression::BinaryLogical(op) => 1 + op.left().depth().max(op.right().depth()),
            Expression::Cast(cast) => 1 + cast.expr().depth(),
        }
    }
}

impl From<Constant> for Expression {
    fn from(value: Constant) -> Self {
        Expression::Constant(value)
    }
}
