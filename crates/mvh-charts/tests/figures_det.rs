use std::fs;

use mvh_charts::{render_comparison_png, ChartSpec, FigureConfig};
use tempfile::tempdir;

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn spec() -> ChartSpec {
    ChartSpec {
        title: "Runtime(ms) MCTS vs HSP blocks".into(),
        x_label: "Task".into(),
        y_label: "Runtime(ms)".into(),
    }
}

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|label| label.to_string()).collect()
}

#[test]
fn rendering_is_deterministic() {
    let dir = tempdir().expect("tempdir");
    let config = FigureConfig {
        width: 320,
        height: 240,
    };
    let labels = labels(&["1", "2", "3"]);
    let mcts = [30.0, 10.0, 12.5];
    let hsp = [40.0, 20.0, 9.0];
    let path_a = dir.path().join("a.png");
    let path_b = dir.path().join("b.png");
    render_comparison_png(&spec(), &labels, &mcts, &hsp, &path_a, &config).expect("render a");
    render_comparison_png(&spec(), &labels, &mcts, &hsp, &path_b, &config).expect("render b");
    let bytes_a = fs::read(&path_a).expect("read a");
    let bytes_b = fs::read(&path_b).expect("read b");
    assert_eq!(bytes_a, bytes_b);
    assert!(bytes_a.starts_with(&PNG_MAGIC));
}

#[test]
fn empty_series_still_produce_an_image() {
    let dir = tempdir().expect("tempdir");
    let config = FigureConfig {
        width: 320,
        height: 240,
    };
    let path = dir.path().join("empty.png");
    render_comparison_png(&spec(), &[], &[], &[], &path, &config).expect("render");
    let bytes = fs::read(&path).expect("read");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn mismatched_series_lengths_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let config = FigureConfig {
        width: 320,
        height: 240,
    };
    let path = dir.path().join("bad.png");
    let labels = labels(&["1", "2"]);
    let err = render_comparison_png(&spec(), &labels, &[1.0], &[2.0, 3.0], &path, &config)
        .expect_err("must reject");
    assert_eq!(err.info().code, "mvh_charts.series_mismatch");
    assert_eq!(err.info().context.get("mcts").map(String::as_str), Some("1"));
}

#[test]
fn existing_file_is_overwritten() {
    let dir = tempdir().expect("tempdir");
    let config = FigureConfig {
        width: 320,
        height: 240,
    };
    let path = dir.path().join("chart.png");
    fs::write(&path, b"stale").expect("seed file");
    let labels = labels(&["1"]);
    render_comparison_png(&spec(), &labels, &[5.0], &[6.0], &path, &config).expect("render");
    let bytes = fs::read(&path).expect("read");
    assert!(bytes.starts_with(&PNG_MAGIC));
}
