use mvh_core::Metric;
use serde::{Deserialize, Serialize};

use crate::schema::ComparisonRecord;

/// Per-domain slice of the dataset, held as five parallel sequences.
///
/// Invariant: all five sequences have the same length, and index `i` refers
/// to the same source row in each of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainGroup {
    pub name: String,
    pub problems: Vec<String>,
    pub mcts_time: Vec<f64>,
    pub mcts_length: Vec<f64>,
    pub hsp_time: Vec<f64>,
    pub hsp_length: Vec<f64>,
}

impl DomainGroup {
    /// Number of rows in the group.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// True when the domain matched no rows.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// The MCTS and HSP series for `metric`, aligned with `problems`.
    pub fn series(&self, metric: Metric) -> (&[f64], &[f64]) {
        match metric {
            Metric::Runtime => (&self.mcts_time, &self.hsp_time),
            Metric::PlanLength => (&self.mcts_length, &self.hsp_length),
        }
    }
}

/// Selects rows whose domain equals `target` (exact, case-sensitive match),
/// stable-sorts them ascending by problem identifier, and lays the metrics
/// out as parallel sequences under the given group name.
pub fn partition_domain(records: &[ComparisonRecord], target: &str, name: &str) -> DomainGroup {
    let mut selected: Vec<&ComparisonRecord> = records
        .iter()
        .filter(|record| record.domain == target)
        .collect();
    selected.sort_by(|a, b| a.problem.cmp(&b.problem));
    let mut group = DomainGroup {
        name: name.to_string(),
        ..DomainGroup::default()
    };
    for record in selected {
        group.problems.push(record.problem.as_str().to_string());
        group.mcts_time.push(record.mcts_time);
        group.mcts_length.push(record.mcts_plan_length);
        group.hsp_time.push(record.hsp_time);
        group.hsp_length.push(record.hsp_plan_length);
    }
    group
}
