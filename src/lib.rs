pub mod expression;
pub mod generator;
pub mod oracle;
pub mod random;
pub mod value;
