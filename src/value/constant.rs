use std::fmt;

use crate::value::cast::CastType;
use crate::value::text;

/// Type of a non-NULL constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantType {
    Boolean,
    Integer,
    Float,
    Text,
}

/// Values produced by evaluating an expression
///
/// A constant is never mutated once built; casts and operators always
/// produce a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Constant {
    pub const NULL: Constant = Constant::Null;
    pub const TRUE: Constant = Constant::Boolean(true);
    pub const FALSE: Constant = Constant::Boolean(false);

    pub fn null() -> Self {
        Constant::Null
    }

    pub fn boolean(value: bool) -> Self {
        Constant::Boolean(value)
    }

    pub fn integer(value: i64) -> Self {
        Constant::Integer(value)
    }

    /// Create a float constant.
    ///
    /// MySQL has no infinities or NaN: infinities saturate at the largest
    /// finite double and NaN becomes NULL.
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            Constant::Null
        } else {
            Constant::Float(saturate(value))
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Constant::Text(value.into())
    }

    /// Get the type of this constant, `None` for NULL
    pub fn constant_type(&self) -> Option<ConstantType> {
        match self {
            Constant::Null => None,
            Constant::Boolean(_) => Some(ConstantType::Boolean),
            Constant::Integer(_) => Some(ConstantType::Integer),
            Constant::Float(_) => Some(ConstantType::Float),
            Constant::Text(_) => Some(ConstantType::Text),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Constant::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Constant::Text(_))
    }

    /// Truthiness of a non-NULL constant.
    ///
    /// Numbers are true when non-zero. Text is read through its leading
    /// numeric prefix first, so `'0.5'` is true and `'abc'` is false.
    ///
    /// # Panics
    ///
    /// Panics when called on NULL. Callers must check `is_null` first.
    pub fn as_boolean_not_null(&self) -> bool {
        match self {
            Constant::Null => panic!("as_boolean_not_null called on NULL"),
            Constant::Boolean(b) => *b,
            Constant::Integer(i) => *i != 0,
            Constant::Float(f) => *f != 0.0 && !f.is_nan(),
            Constant::Text(s) => text::leading_double(s) != 0.0,
        }
    }

    /// Payload of an integer constant.
    ///
    /// # Panics
    ///
    /// Panics on any other variant; a mistyped tree is a generator bug.
    pub fn as_int(&self) -> i64 {
        match self {
            Constant::Integer(i) => *i,
            other => panic!("expected an integer constant, got {:?}", other),
        }
    }

    /// Explicit conversion, `CAST(self AS target)`
    pub fn cast_as(&self, target: CastType) -> Constant {
        if self.is_null() || matches!(self, Constant::Float(f) if f.is_nan()) {
            return Constant::Null;
        }
        match target {
            CastType::Signed => Constant::Integer(self.to_signed()),
            CastType::Double => Constant::Float(self.to_double()),
            CastType::Char => Constant::Text(self.to_char()),
        }
    }

    fn to_signed(&self) -> i64 {
        match self {
            Constant::Null => 0,
            Constant::Boolean(b) => i64::from(*b),
            Constant::Integer(i) => *i,
            // `as` saturates at the i64 bounds and maps NaN to 0
            Constant::Float(f) => f.round() as i64,
            Constant::Text(s) => text::leading_signed(s),
        }
    }

    fn to_double(&self) -> f64 {
        match self {
            Constant::Null => 0.0,
            Constant::Boolean(b) => f64::from(u8::from(*b)),
            Constant::Integer(i) => *i as f64,
            Constant::Float(f) => saturate(*f),
            Constant::Text(s) => text::leading_double(s),
        }
    }

    fn to_char(&self) -> String {
        match self {
            Constant::Null => String::new(),
            Constant::Boolean(b) => u8::from(*b).to_string(),
            Constant::Integer(i) => i.to_string(),
            Constant::Float(f) => format_double(*f),
            Constant::Text(s) => s.clone(),
        }
    }
}

fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}

/// Textual form of a double as MySQL prints it: plain decimal for
/// moderate magnitudes, scientific notation like `1e300` otherwise.
fn format_double(value: f64) -> String {
    let value = saturate(value);
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor();
    if !(-15.0..15.0).contains(&exponent) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

/// SQL literal form of the constant
impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Null => write!(f, "NULL"),
            Constant::Boolean(true) => write!(f, "TRUE"),
            Constant::Boolean(false) => write!(f, "FALSE"),
            Constant::Integer(i) => write!(f, "{}", i),
            Constant::Float(v) if v.is_nan() => write!(f, "NULL"),
            // Debug keeps a decimal point or exponent, so 1.0 does not
            // read back as the integer 1
            Constant::Float(v) => write!(f, "{:?}", saturate(*v)),
            Constant::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}
