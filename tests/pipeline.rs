use std::fs;
use std::path::Path;

use psi_tradeoff::app::pipeline::{build_figure, run_pipeline};
use psi_tradeoff::config::{DisplayMode, PipelineConfig};
use psi_tradeoff::domain::AxisScale;
use psi_tradeoff::error::AppError;

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        okvs_path: dir.join("okvs_bench.csv"),
        threshold_path: dir.join("rt_vs_n_by_t.csv"),
        output_path: dir.join("fig_param_tradeoff.svg"),
        resolution: 72,
        display: DisplayMode::Never,
        ..PipelineConfig::default()
    }
}

fn write_inputs(config: &PipelineConfig) {
    fs::write(&config.okvs_path, "alpha,succ\n0.1,0.5\n0.2,0.9\n").unwrap();
    fs::write(&config.threshold_path, "t,comm\n1,10\n1,20\n2,30\n").unwrap();
}

#[test]
fn builds_three_panels_from_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_inputs(&config);

    let figure = build_figure(&config).unwrap();
    assert_eq!(figure.panels.len(), 3);
    assert_eq!(figure.layout.cols, 3);

    let okvs = &figure.panels[0];
    assert_eq!(okvs.series[0].points, vec![(0.1, 0.5), (0.2, 0.9)]);
    assert_eq!(okvs.y_scale, AxisScale::Linear);

    let cuckoo = &figure.panels[1];
    assert_eq!(cuckoo.y_scale, AxisScale::Log);
    assert_eq!(cuckoo.series[0].points.len(), 7);
    assert_eq!(cuckoo.series[0].points[0], (1.05, 1e-2));

    let comm = &figure.panels[2];
    assert_eq!(comm.series[0].points, vec![(1.0, 15.0), (2.0, 30.0)]);
}

#[test]
fn writes_the_svg() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_inputs(&config);

    let path = run_pipeline(&config).unwrap();
    assert_eq!(path, config.output_path);
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("OKVS success"));
    assert!(svg.contains("Cuckoo fail"));
    assert!(svg.contains("Comm cost"));
}

#[test]
fn heuristic_headers_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.okvs_path, "n,Alpha,Success_Rate,encode_ms\n100,0.3,0.7,1.2\n").unwrap();
    fs::write(&config.threshold_path, "t,n,comm_mb\n3,10,1.5\n2,10,1.0\n3,20,2.5\n").unwrap();

    let figure = build_figure(&config).unwrap();
    assert_eq!(figure.panels[0].series[0].points, vec![(0.3, 0.7)]);
    assert_eq!(figure.panels[2].series[0].points, vec![(2.0, 1.0), (3.0, 2.0)]);
}

#[test]
fn missing_threshold_file_fails_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    // File A exists but is malformed; it must not be parsed.
    fs::write(&config.okvs_path, "alpha,succ\n0.1,0.5,extra\n").unwrap();

    let err = run_pipeline(&config).unwrap_err();
    match &err {
        AppError::MissingInput { paths } => assert_eq!(paths, &vec![config.threshold_path.clone()]),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 2);
    assert!(!config.output_path.exists());
}

#[test]
fn both_missing_files_are_reported_together() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    match build_figure(&config).unwrap_err() {
        AppError::MissingInput { paths } => assert_eq!(paths.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unresolved_success_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.okvs_path, "alpha,time_ms\n0.1,3.0\n").unwrap();
    fs::write(&config.threshold_path, "t,comm\n1,10\n").unwrap();

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(&err, AppError::SchemaResolution { semantic, .. } if semantic == "success"));
    assert_eq!(err.exit_code(), 3);
    assert!(!config.output_path.exists());
}

#[test]
fn empty_threshold_table_gives_an_empty_panel() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.okvs_path, "alpha,succ\n0.1,0.5\n").unwrap();
    fs::write(&config.threshold_path, "t,comm\n").unwrap();

    let figure = build_figure(&config).unwrap();
    assert!(figure.panels[2].series[0].points.is_empty());
}

#[test]
fn unwritable_output_is_an_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    write_inputs(&config);
    config.output_path = dir.path().join("missing").join("fig.svg");

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, AppError::Export { .. }));
    assert!(!config.output_path.exists());
}
