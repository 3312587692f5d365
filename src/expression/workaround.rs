//! Guards for known defects in MySQL.
//!
//! Each guard rejects one narrow input shape where MySQL's answer is known
//! to be wrong. They sit apart from the truth tables so a guard can be
//! dropped on its own once the upstream bug is fixed.

use crate::expression::skip::{EvalResult, Skip, SkipReason};
use crate::value::{CastType, Constant};

/// https://bugs.mysql.com/bug.php?id=95927
///
/// XOR returns inconsistent results when either side is a string.
pub fn reject_xor_with_text(left: &Constant, right: &Constant) -> EvalResult<()> {
    if left.is_string() || right.is_string() {
        return Err(Skip::new(SkipReason::XorWithText));
    }
    Ok(())
}

/// https://bugs.mysql.com/bug.php?id=95958
///
/// Short numeric-looking strings that are false and whose signed cast is
/// exactly 0 evaluate inconsistently inside logical operators.
pub fn reject_zero_valued_text(value: &Constant) -> EvalResult<()> {
    if value.is_string()
        && !value.as_boolean_not_null()
        && value.cast_as(CastType::Signed).as_int() == 0
    {
        return Err(Skip::new(SkipReason::ZeroValuedText));
    }
    Ok(())
}

/// https://bugs.mysql.com/bug.php?id=95958
///
/// Strings holding a small fraction, such as '0.5', are true as booleans
/// but cast to a signed 0, and MySQL mixes the two readings up.
pub fn reject_small_fractional_text(value: &Constant) -> EvalResult<()> {
    if value.is_string()
        && value.as_boolean_not_null()
        && value.cast_as(CastType::Signed).as_int() == 0
    {
        return Err(Skip::new(SkipReason::SmallFractionalText));
    }
    Ok(())
}
