//! Expected-value oracle: compares computed results against a live database.
//!
//! The database side is behind the `TargetDatabase` trait so that drivers
//! for real engines live outside this crate. The oracle owns the handling
//! of the skip signal: a skipped case is counted and dropped, never sent to
//! the database and never reported as a mismatch.

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::expression::{Expression, SkipReason};
use crate::value::Constant;

/// A database that can evaluate a single scalar SQL expression
pub trait TargetDatabase {
    /// Evaluate `sql`, e.g. by running `SELECT <sql>`, and return the value
    fn evaluate(&mut self, sql: &str) -> Result<Constant>;
}

/// Outcome of checking one expression
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The database agreed with the expected value
    Match,
    /// The database disagreed, a candidate bug
    Mismatch {
        sql: String,
        expected: Constant,
        actual: Constant,
    },
    /// The case was inconclusive and has been discarded
    Skipped(SkipReason),
}

/// Counters kept across checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleStats {
    pub checked: u64,
    pub matched: u64,
    pub mismatched: u64,
    pub skipped: u64,
}

impl OracleStats {
    pub fn record(&mut self, verdict: &Verdict) {
        self.checked += 1;
        match verdict {
            Verdict::Match => self.matched += 1,
            Verdict::Mismatch { .. } => self.mismatched += 1,
            Verdict::Skipped(_) => self.skipped += 1,
        }
    }
}

fn as_number(value: &Constant) -> Option<f64> {
    match value {
        Constant::Boolean(b) => Some(f64::from(u8::from(*b))),
        Constant::Integer(i) => Some(*i as f64),
        Constant::Float(f) => Some(*f),
        Constant::Null | Constant::Text(_) => None,
    }
}

/// Whether a value returned by the database agrees with the expected one.
///
/// NULL only matches NULL. An expected boolean compares by truthiness,
/// since MySQL returns logical results as 0/1 integers. Every other
/// expected value must match exactly, numbers by numeric value.
pub fn values_agree(expected: &Constant, actual: &Constant) -> bool {
    match (expected, actual) {
        (Constant::Null, Constant::Null) => true,
        (Constant::Null, _) | (_, Constant::Null) => false,
        (Constant::Boolean(b), _) => actual.as_boolean_not_null() == *b,
        (Constant::Integer(a), Constant::Integer(b)) => a == b,
        (Constant::Text(a), Constant::Text(b)) => a == b,
        (Constant::Text(_), _) | (_, Constant::Text(_)) => false,
        _ => as_number(expected) == as_number(actual),
    }
}

pub struct ExpectedValueOracle<D: TargetDatabase> {
    database: D,
    stats: OracleStats,
}

impl<D: TargetDatabase> ExpectedValueOracle<D> {
    pub fn new(database: D) -> Self {
        Self {
            database,
            stats: OracleStats::default(),
        }
    }

    /// Check one expression against the database.
    ///
    /// Errors only come from the database itself.
    pub fn check(&mut self, expr: &Expression) -> Result<Verdict> {
        let verdict = match expr.expected_value() {
            Err(skip) => {
                debug!("Discarding case: {}", skip);
                Verdict::Skipped(skip.reason())
            }
            Ok(expected) => {
                let sql = expr.to_string();
                let actual = self
                    .database
                    .evaluate(&sql)
                    .with_context(|| format!("Failed to evaluate {}", sql))?;

                if values_agree(&expected, &actual) {
                    Verdict::Match
                } else {
                    warn!(
                        "Mismatch for {}: expected {}, database returned {}",
                        sql, expected, actual
                    );
                    Verdict::Mismatch {
                        sql,
                        expected,
                        actual,
                    }
                }
            }
        };

        self.stats.record(&verdict);
        Ok(verdict)
    }

    pub fn stats(&self) -> OracleStats {
        self.stats
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn into_database(self) -> D {
        self.database
    }
}
