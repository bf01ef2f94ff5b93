use mvh_core::ProblemId;
use serde::{Deserialize, Serialize};

/// Columns the comparison dataset is required to carry.
pub const EXPECTED_COLUMNS: [&str; 6] = [
    "domain",
    "problem",
    "mcts_time",
    "mcts_plan_length",
    "hsp_time",
    "hsp_plan_length",
];

/// One row of the planner comparison dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub domain: String,
    pub problem: ProblemId,
    pub mcts_time: f64,
    pub mcts_plan_length: f64,
    pub hsp_time: f64,
    pub hsp_plan_length: f64,
}
