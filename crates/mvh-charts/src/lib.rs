//! PNG chart rendering and report assembly for planner comparisons.

pub mod figures;
pub mod report;

pub use figures::{render_comparison_png, ChartSpec, FigureConfig};
pub use report::{build_report, ReportSummary, DOMAIN_TARGETS};
