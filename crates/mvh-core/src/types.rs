//! Typed identifiers and metric selectors for comparison datasets.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a planning problem within a domain.
///
/// The order is numeric whenever both identifiers parse as integers, matching
/// how an all-numeric problem column sorts. Numeric identifiers come before
/// non-numeric ones; everything else compares lexicographically, with a final
/// lexicographic tie-break so the order agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(String);

impl ProblemId {
    /// Creates an identifier from its raw textual representation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw textual representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for ProblemId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<i64>(), other.0.parse::<i64>()) {
            (Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs).then_with(|| self.0.cmp(&other.0)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ProblemId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Metric compared between the two planners in a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Wall-clock search time in milliseconds.
    Runtime,
    /// Number of actions in the solution plan.
    PlanLength,
}

impl Metric {
    /// Y-axis label used when charting this metric.
    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Runtime => "Runtime(ms)",
            Metric::PlanLength => "Plan length",
        }
    }
}
