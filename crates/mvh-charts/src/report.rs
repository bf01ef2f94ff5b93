use std::fs;
use std::path::{Path, PathBuf};

use mvh_core::{ErrorInfo, Metric, MvhError};
use mvh_data::{partition_domain, ComparisonRecord, DomainGroup};
use serde::{Deserialize, Serialize};

use crate::figures::{render_comparison_png, ChartSpec, FigureConfig};

/// The three fixed domain partitions, as (dataset value, group name).
pub const DOMAIN_TARGETS: [(&str, &str); 3] = [
    ("blocks", "blocksworld"),
    ("gripper", "gripper"),
    ("logistics", "logistics"),
];

const X_LABEL: &str = "Task";

/// Summary of a completed report build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Paths of the charts written, in render order.
    pub charts: Vec<PathBuf>,
}

struct ChartJob {
    group: usize,
    metric: Metric,
    title: &'static str,
    filename: &'static str,
}

const CHART_JOBS: [ChartJob; 6] = [
    ChartJob {
        group: 0,
        metric: Metric::Runtime,
        title: "Runtime(ms) MCTS vs HSP blocks",
        filename: "RuntimeMctsvsHspBlock.png",
    },
    ChartJob {
        group: 1,
        metric: Metric::Runtime,
        title: "Runtime(ms) MCTS vs HSP gripper",
        filename: "RuntimeMctsvsHspGripper.png",
    },
    ChartJob {
        group: 2,
        metric: Metric::Runtime,
        title: "Runtime(ms) MCTS vs HSP logistics",
        filename: "RuntimeMctsvsHspLogistics.png",
    },
    ChartJob {
        group: 0,
        metric: Metric::PlanLength,
        title: "Plan length MCTS vs HSP blocks",
        filename: "PlanLengthBlocks.png",
    },
    ChartJob {
        group: 1,
        metric: Metric::PlanLength,
        title: "Plan length MCTS vs HSP gripper",
        filename: "PlanLengthGripper.png",
    },
    ChartJob {
        group: 2,
        metric: Metric::PlanLength,
        title: "Plan length MCTS vs HSP logistics",
        filename: "PlanLengthLogistics.png",
    },
];

/// Partitions `records` into the three planning domains and renders all six
/// comparison charts into `out_dir`, in the fixed order runtime then plan
/// length, blocksworld then gripper then logistics within each metric.
pub fn build_report(
    records: &[ComparisonRecord],
    out_dir: &Path,
    config: &FigureConfig,
) -> Result<ReportSummary, MvhError> {
    fs::create_dir_all(out_dir).map_err(|err| {
        MvhError::Chart(
            ErrorInfo::new("mvh_charts.output_dir", err.to_string())
                .with_context("path", out_dir.display().to_string()),
        )
    })?;
    let groups: Vec<DomainGroup> = DOMAIN_TARGETS
        .iter()
        .map(|(target, name)| partition_domain(records, target, name))
        .collect();
    let mut charts = Vec::with_capacity(CHART_JOBS.len());
    for job in &CHART_JOBS {
        let group = &groups[job.group];
        let (mcts, hsp) = group.series(job.metric);
        let spec = ChartSpec {
            title: job.title.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: job.metric.y_label().to_string(),
        };
        let path = out_dir.join(job.filename);
        render_comparison_png(&spec, &group.problems, mcts, hsp, &path, config)?;
        charts.push(path);
    }
    Ok(ReportSummary { charts })
}
