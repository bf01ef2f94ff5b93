use std::path::Path;

use mvh_core::{ErrorInfo, MvhError};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

/// Pixel dimensions for rendered figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Title and axis labelling for a single comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

fn chart_error(code: &str, err: impl ToString) -> MvhError {
    MvhError::Chart(ErrorInfo::new(code, err.to_string()))
}

/// Renders a two-line comparison chart to `out_path` as a PNG, overwriting
/// any existing file.
///
/// Both series must align index-for-index with `labels`; a length mismatch is
/// an error. Zero data points render an axes-only figure.
pub fn render_comparison_png(
    spec: &ChartSpec,
    labels: &[String],
    mcts: &[f64],
    hsp: &[f64],
    out_path: &Path,
    config: &FigureConfig,
) -> Result<(), MvhError> {
    if mcts.len() != labels.len() || hsp.len() != labels.len() {
        return Err(MvhError::Chart(
            ErrorInfo::new(
                "mvh_charts.series_mismatch",
                "series lengths do not match the label axis",
            )
            .with_context("labels", labels.len().to_string())
            .with_context("mcts", mcts.len().to_string())
            .with_context("hsp", hsp.len().to_string()),
        ));
    }

    let root = BitMapBackend::new(out_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| chart_error("mvh_charts.fill", err))?;

    let x_max = labels.len().saturating_sub(1).max(1) as f64;
    let y_max = mcts
        .iter()
        .chain(hsp.iter())
        .copied()
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(|err| chart_error("mvh_charts.layout", err))?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .x_labels(labels.len().clamp(2, 12))
        .x_label_formatter(&|x| labels.get(x.round() as usize).cloned().unwrap_or_default())
        .draw()
        .map_err(|err| chart_error("mvh_charts.mesh", err))?;

    chart
        .draw_series(LineSeries::new(
            mcts.iter()
                .enumerate()
                .map(|(idx, value)| (idx as f64, *value)),
            &BLUE,
        ))
        .map_err(|err| chart_error("mvh_charts.series", err))?
        .label("MCTS")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            hsp.iter()
                .enumerate()
                .map(|(idx, value)| (idx as f64, *value)),
            &RED,
        ))
        .map_err(|err| chart_error("mvh_charts.series", err))?
        .label("HSP")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|err| chart_error("mvh_charts.legend", err))?;

    root.present()
        .map_err(|err| chart_error("mvh_charts.present", err))?;
    Ok(())
}
