//! The skip signal: an evaluation outcome meaning "discard this case".

use std::fmt;
use thiserror::Error;

/// Why a case was judged inconclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// XOR with a text operand, https://bugs.mysql.com/bug.php?id=95927
    XorWithText,
    /// Text that is false yet casts to exactly 0,
    /// https://bugs.mysql.com/bug.php?id=95958
    ZeroValuedText,
    /// Text that is true yet casts to exactly 0, such as '0.5',
    /// https://bugs.mysql.com/bug.php?id=95958
    SmallFractionalText,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::XorWithText => write!(f, "XOR with a text operand (MySQL bug #95927)"),
            SkipReason::ZeroValuedText => {
                write!(f, "zero-valued text operand (MySQL bug #95958)")
            }
            SkipReason::SmallFractionalText => {
                write!(f, "small fractional text operand (MySQL bug #95958)")
            }
        }
    }
}

/// Raised when the expected value cannot be trusted as ground truth.
///
/// This is not a failure. Evaluation frames pass it upwards unchanged and
/// only the oracle driver acts on it, by dropping the test case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("inconclusive case: {reason}")]
pub struct Skip {
    reason: SkipReason,
}

impl Skip {
    pub fn new(reason: SkipReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> SkipReason {
        self.reason
    }
}

/// Result of evaluating an expression: a constant, or the skip signal
pub type EvalResult<T> = Result<T, Skip>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_display() {
        let skip = Skip::new(SkipReason::XorWithText);
        assert_eq!(skip.reason(), SkipReason::XorWithText);
        assert_eq!(
            skip.to_string(),
            "inconclusive case: XOR with a text operand (MySQL bug #95927)"
        );

        let skip = Skip::new(SkipReason::ZeroValuedText);
        assert_eq!(
            skip.to_string(),
            "inconclusive case: zero-valued text operand (MySQL bug #95958)"
        );

        let skip = Skip::new(SkipReason::SmallFractionalText);
        assert_eq!(
            skip.to_string(),
            "inconclusive case: small fractional text operand (MySQL bug #95958)"
        );
    }
}
