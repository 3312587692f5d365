//! Expected-value evaluation.

use crate::expression::expr::{BinaryLogicalOperation, CastOperation, Expression};
use crate::expression::skip::EvalResult;
use crate::expression::workaround;
use crate::value::Constant;

impl Expression {
    /// Compute the value a correct database must return for this tree.
    ///
    /// Children are evaluated before their parent. A skip raised anywhere
    /// in the tree is returned as-is.
    pub fn expected_value(&self) -> EvalResult<Constant> {
        match self {
            Expression::Constant(value) => Ok(value.clone()),
            Expression::BinaryLogical(op) => op.expected_value(),
            Expression::Cast(cast) => cast.expected_value(),
        }
    }
}

impl BinaryLogicalOperation {
    pub fn expected_value(&self) -> EvalResult<Constant> {
        let left = self.left().expected_value()?;
        let right = self.right().expected_value()?;

        for operand in [&left, &right] {
            workaround::reject_zero_valued_text(operand)?;
            workaround::reject_small_fractional_text(operand)?;
        }

        self.op().apply(&left, &right)
    }
}

impl CastOperation {
    pub fn expected_value(&self) -> EvalResult<Constant> {
        Ok(self.expr().expected_value()?.cast_as(self.target()))
    }
}

/// Helper function to evaluate a tree
pub fn evaluate_expression(expr: &Expression) -> EvalResult<Constant> {
    expr.expected_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{BinaryLogicalOperator, SkipReason};
    use crate::random::Randomly;
    use crate::value::CastType;

    fn op(
        op: BinaryLogicalOperator,
        left: impl Into<Expression>,
        right: impl Into<Expression>,
    ) -> Expression {
        let mut randomly = Randomly::with_seed(0);
        Expression::binary_logical(op, left.into(), right.into(), &mut randomly)
    }

    #[test]
    fn test_constant_evaluation() {
        for value in [
            Constant::NULL,
            Constant::TRUE,
            Constant::integer(42),
            Constant::float(0.5),
            Constant::text("hello"),
        ] {
            assert_eq!(
                evaluate_expression(&Expression::constant(value.clone())).unwrap(),
                value
            );
        }
    }

    #[test]
    fn test_concrete_cases() {
        use BinaryLogicalOperator::*;

        let expr = op(And, Constant::NULL, Constant::FALSE);
        assert_eq!(expr.expected_value().unwrap(), Constant::FALSE);

        let expr = op(Or, Constant::NULL, Constant::NULL);
        assert_eq!(expr.expected_value().unwrap(), Constant::NULL);

        let expr = op(Xor, Constant::TRUE, Constant::FALSE);
        assert_eq!(expr.expected_value().unwrap(), Constant::TRUE);

        let expr = op(Xor, Constant::text("5"), Constant::TRUE);
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::XorWithText
        );

        let expr = op(And, Constant::text("0"), Constant::TRUE);
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::ZeroValuedText
        );
    }

    #[test]
    fn test_zero_valued_text_skips_for_every_operator() {
        for operator in BinaryLogicalOperator::ALL {
            for other in [Constant::NULL, Constant::TRUE, Constant::FALSE] {
                let expr = op(operator, other.clone(), Constant::text("0.0"));
                assert_eq!(
                    expr.expected_value().unwrap_err().reason(),
                    SkipReason::ZeroValuedText,
                    "{:?} with {:?}",
                    operator,
                    other
                );
            }
        }
    }

    #[test]
    fn test_zero_valued_text_guard_runs_before_null_handling() {
        // XOR would return NULL here, but the guard fires first
        let expr = op(BinaryLogicalOperator::Xor, Constant::NULL, Constant::text("abc"));
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::ZeroValuedText
        );
    }

    #[test]
    fn test_truthy_text_evaluates() {
        let expr = op(BinaryLogicalOperator::And, Constant::text("1.5"), Constant::TRUE);
        assert_eq!(expr.expected_value().unwrap(), Constant::TRUE);

        let expr = op(BinaryLogicalOperator::Or, Constant::text(" 12abc"), Constant::NULL);
        assert_eq!(expr.expected_value().unwrap(), Constant::TRUE);
    }

    #[test]
    fn test_small_fractional_text_skips_for_every_operator() {
        for operator in BinaryLogicalOperator::ALL {
            for other in [Constant::NULL, Constant::TRUE, Constant::FALSE] {
                for expr in [
                    op(operator, Constant::text("0.5"), other.clone()),
                    op(operator, other.clone(), Constant::text("-0.5")),
                ] {
                    assert_eq!(
                        expr.expected_value().unwrap_err().reason(),
                        SkipReason::SmallFractionalText,
                        "{}",
                        expr
                    );
                }
            }
        }
    }

    #[test]
    fn test_small_fractional_text_guard_runs_before_truth_tables() {
        // TRUE would absorb the other side of OR, and XOR would skip for
        // text anyway, but the fractional text is rejected first
        let expr = op(BinaryLogicalOperator::Or, Constant::TRUE, Constant::text(".5"));
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::SmallFractionalText
        );

        let expr = op(BinaryLogicalOperator::Xor, Constant::text("0.5"), Constant::TRUE);
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::SmallFractionalText
        );
    }

    #[test]
    fn test_nested_evaluation() {
        use BinaryLogicalOperator::*;

        // (NULL OR TRUE) AND (1 XOR 1) = TRUE AND FALSE
        let expr = op(
            And,
            op(Or, Constant::NULL, Constant::TRUE),
            op(Xor, Constant::integer(1), Constant::integer(1)),
        );
        assert_eq!(expr.expected_value().unwrap(), Constant::FALSE);

        // (NULL AND TRUE) OR FALSE = NULL
        let expr = op(Or, op(And, Constant::NULL, Constant::TRUE), Constant::FALSE);
        assert_eq!(expr.expected_value().unwrap(), Constant::NULL);
    }

    #[test]
    fn test_skip_propagates_through_parents() {
        use BinaryLogicalOperator::*;

        // OR with TRUE would absorb anything, but the skip still wins
        let inner = op(Xor, Constant::text("7"), Constant::FALSE);
        let expr = op(Or, Constant::TRUE, op(And, Constant::TRUE, inner));
        assert_eq!(
            expr.expected_value().unwrap_err().reason(),
            SkipReason::XorWithText
        );
    }

    #[test]
    fn test_cast_evaluation() {
        let expr = Expression::cast(Constant::text("12abc").into(), CastType::Signed);
        assert_eq!(expr.expected_value().unwrap(), Constant::integer(12));

        let expr = Expression::cast(Constant::NULL.into(), CastType::Double);
        assert_eq!(expr.expected_value().unwrap(), Constant::NULL);

        // Casting text to a number sidesteps both text guards
        let expr = op(
            BinaryLogicalOperator::Xor,
            Expression::cast(Constant::text("5").into(), CastType::Signed),
            Constant::TRUE,
        );
        assert_eq!(expr.expected_value().unwrap(), Constant::FALSE);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        use BinaryLogicalOperator::*;
        let expr = op(
            Or,
            op(And, Constant::NULL, Constant::float(2.0)),
            Expression::cast(Constant::TRUE.into(), CastType::Char),
        );
        let first = expr.expected_value();
        for _ in 0..5 {
            assert_eq!(expr.expected_value(), first);
        }
    }
}
