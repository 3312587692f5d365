//! Constant value model for expected-value evaluation.
//!
//! This module provides:
//!
//! - **Constant**: Immutable NULL / boolean / integer / float / text values
//! - **ConstantType**: Type tag of a non-NULL constant
//! - **CastType**: Targets for explicit `CAST(... AS ...)` conversion
//!
//! Text follows the MySQL convention of reading a leading numeric prefix
//! whenever a number is needed, so `' 12abc'` behaves like `12`.

pub mod cast;
pub mod constant;
pub mod text;

pub use cast::CastType;
pub use constant::{Constant, ConstantType};
