//! Random expression trees for exercising the evaluator.

use crate::expression::{BinaryLogicalOperator, Expression};
use crate::random::Randomly;
use crate::value::{CastType, Constant};

/// Text values that hit MySQL's prefix-parsing corner cases
const INTERESTING_TEXT: &[&str] = &[
    "0", "1", "-0", "0.0", "0.5", "-0.5", " 12abc", "abc", "", "1e3", "1e", ".5", "+7", " ",
];

/// Settings for random tree generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum depth of generated trees, a single constant is depth 1
    pub max_depth: usize,
    /// Chance that a leaf constant is NULL
    pub null_probability: f64,
    /// Chance that a generated node is wrapped in a CAST
    pub cast_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            null_probability: 0.2,
            cast_probability: 0.1,
        }
    }
}

pub struct ExpressionGenerator {
    config: GeneratorConfig,
}

impl ExpressionGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate one tree no deeper than `max_depth`
    pub fn generate(&self, randomly: &mut Randomly) -> Expression {
        self.generate_at(self.config.max_depth.max(1), randomly)
    }

    fn generate_at(&self, depth: usize, randomly: &mut Randomly) -> Expression {
        if depth > 1 && randomly.probability(self.config.cast_probability) {
            let target = *randomly.from_options(&CastType::ALL);
            return Expression::cast(self.generate_at(depth - 1, randomly), target);
        }
        if depth <= 1 || randomly.boolean() {
            return Expression::constant(self.generate_constant(randomly));
        }

        let op = BinaryLogicalOperator::random(randomly);
        let left = self.generate_at(depth - 1, randomly);
        let right = self.generate_at(depth - 1, randomly);
        Expression::binary_logical(op, left, right, randomly)
    }

    /// Generate a random leaf value
    pub fn generate_constant(&self, randomly: &mut Randomly) -> Constant {
        if randomly.probability(self.config.null_probability) {
            return Constant::null();
        }
        match randomly.integer(0..4) {
            0 => Constant::boolean(randomly.boolean()),
            1 => Constant::integer(randomly.integer(-3..4)),
            2 => {
                let scale = *randomly.from_options(&[0.0, 0.1, 1.0, 100.0]);
                Constant::float(randomly.float() * scale)
            }
            _ => Constant::text(*randomly.from_options(INTERESTING_TEXT)),
        }
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
