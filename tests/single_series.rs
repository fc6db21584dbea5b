use std::fs;

use psi_tradeoff::config::DisplayMode;
use psi_tradeoff::domain::{AxisScale, Marker, Panel, Rgb, SeriesKind, StyleProfile, Value};
use psi_tradeoff::io::{load_table, render};
use psi_tradeoff::plot::compose;
use psi_tradeoff::schema::resolve;

#[test]
fn encode_time_vs_n() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("okvs_bench.csv");
    fs::write(
        &input,
        "phase,n,time_ms\nencode,1000,1.5\ndecode,1000,0.8\nencode,2000,3.2\ndecode,2000,1.7\n",
    )
    .unwrap();

    let table = load_table(&input).unwrap();
    let phase = resolve(&table, "phase", &["phase"]).unwrap();
    let encode = table.filter_eq(&phase, &Value::Text("encode".to_string())).unwrap();
    let points = encode.numeric_pairs("n", "time_ms").unwrap();
    assert_eq!(points, vec![(1000.0, 1.5), (2000.0, 3.2)]);

    let panel = Panel::new(
        "RB-OKVS Encode Benchmark",
        "n (number of key-value pairs)",
        "Encode time (ms)",
        AxisScale::Linear,
    )
    .with_series("encode", points, Marker::Circle, Rgb::BLUE);
    let figure = compose(vec![panel], StyleProfile::default()).unwrap();
    assert_eq!(figure.layout.cols, 1);

    let output = dir.path().join("okvs_bench.svg");
    render(figure, &output, 150, DisplayMode::Never).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("RB-OKVS Encode Benchmark"));
}

#[test]
fn estimated_intersection_scatter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("result.csv");
    fs::write(&input, "hi,lo\n12,3\n15,4\n9,2\n").unwrap();

    let table = load_table(&input).unwrap();
    let points = table.numeric_pairs("hi", "lo").unwrap();
    let panel = Panel::new("Estimated Intersection (by tags)", "hi", "lo", AxisScale::Linear).with_scatter(
        "tags",
        points,
        Marker::Circle,
        Rgb::BLUE,
    );
    assert_eq!(panel.series[0].kind, SeriesKind::Scatter);
    assert_eq!(panel.series[0].points, vec![(12.0, 3.0), (15.0, 4.0), (9.0, 2.0)]);

    let output = dir.path().join("result.svg");
    render(compose(vec![panel], StyleProfile::default()).unwrap(), &output, 160, DisplayMode::Never).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("Estimated Intersection"));
}
