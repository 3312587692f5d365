//! Expected-value evaluation of generated SQL expressions.
//!
//! This module provides:
//! - Expression tree representation (constants, logical operators, casts)
//! - Three-valued AND / OR / XOR truth tables
//! - The skip signal for cases that cannot be decided
//! - Guards for known defects in the reference engine
//! - Stable SQL rendering of a tree

pub mod eval;
pub mod expr;
pub mod operator;
pub mod render;
pub mod skip;
pub mod workaround;

pub use eval::evaluate_expression;
pub use expr::{BinaryLogicalOperation, CastOperation, Expression};
pub use operator::BinaryLogicalOperator;
pub use skip::{EvalResult, Skip, SkipReason};
