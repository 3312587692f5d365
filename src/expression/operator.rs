//! Logical operators and their three-valued truth tables.

use crate::expression::skip::EvalResult;
use crate::expression::workaround;
use crate::random::Randomly;
use crate::value::Constant;

/// Binary logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLogicalOperator {
    And,
    Or,
    Xor,
}

impl BinaryLogicalOperator {
    pub const ALL: [BinaryLogicalOperator; 3] = [
        BinaryLogicalOperator::And,
        BinaryLogicalOperator::Or,
        BinaryLogicalOperator::Xor,
    ];

    /// Pick an operator uniformly
    pub fn random(randomly: &mut Randomly) -> Self {
        *randomly.from_options(&Self::ALL)
    }

    /// Accepted SQL spellings of this operator
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            BinaryLogicalOperator::And => &["AND", "&&"],
            BinaryLogicalOperator::Or => &["OR", "||"],
            BinaryLogicalOperator::Xor => &["XOR"],
        }
    }

    /// Combine two evaluated operands
    pub fn apply(&self, left: &Constant, right: &Constant) -> EvalResult<Constant> {
        match self {
            BinaryLogicalOperator::And => Ok(and(left, right)),
            BinaryLogicalOperator::Or => Ok(or(left, right)),
            BinaryLogicalOperator::Xor => xor(left, right),
        }
    }
}

fn is_true(value: &Constant) -> bool {
    !value.is_null() && value.as_boolean_not_null()
}

fn is_false(value: &Constant) -> bool {
    !value.is_null() && !value.as_boolean_not_null()
}

// FALSE absorbs NULL
fn and(left: &Constant, right: &Constant) -> Constant {
    if is_false(left) || is_false(right) {
        Constant::FALSE
    } else if left.is_null() || right.is_null() {
        Constant::NULL
    } else {
        Constant::TRUE
    }
}

// TRUE absorbs NULL
fn or(left: &Constant, right: &Constant) -> Constant {
    if is_true(left) || is_true(right) {
        Constant::TRUE
    } else if left.is_null() || right.is_null() {
        Constant::NULL
    } else {
        Constant::FALSE
    }
}

fn xor(left: &Constant, right: &Constant) -> EvalResult<Constant> {
    if left.is_null() || right.is_null() {
        return Ok(Constant::NULL);
    }
    workaround::reject_xor_with_text(left, right)?;
    Ok(Constant::boolean(
        left.as_boolean_not_null() ^ right.as_boolean_not_null(),
    ))
}
