//! End-to-end shaping of small observation sets and payloads.

use api::AnalysisPayload;
use ui::charts::{AnalysisCharts, ChartCache, ChartsConfig, HeatmapConfig, HeatmapTable};
use ui::core::{CategoryIndex, ColorScale, Observation, PivotMatrix, ScaleDomain};

fn obs(row: &str, col: &str, value: f64) -> Observation {
    Observation::new(row, col, value)
}

#[test]
fn three_observations_pivot_and_normalize() {
    let observations = vec![obs("A", "X", 10.0), obs("A", "Y", 30.0), obs("B", "X", 20.0)];

    let index = CategoryIndex::from_observations(&observations);
    assert_eq!(index.rows.to_vec(), vec!["A", "B"]);
    assert_eq!(index.cols.to_vec(), vec!["X", "Y"]);

    let matrix = PivotMatrix::from_observations(&observations);
    assert_eq!(matrix.get_by_key("A", "X"), Some(10.0));
    assert_eq!(matrix.get_by_key("A", "Y"), Some(30.0));
    assert_eq!(matrix.get_by_key("B", "X"), Some(20.0));
    assert_eq!(matrix.get_by_key("B", "Y"), None);

    let domain = ScaleDomain::from_values(matrix.present_values());
    assert_eq!((domain.min, domain.max), (10.0, 30.0));
    assert_eq!(domain.normalize(20.0), 0.5);
    assert_eq!(domain.normalize(10.0), 0.0);
    assert_eq!(domain.normalize(30.0), 1.0);
}

#[test]
fn single_observation_takes_the_fallback_color() {
    let config = HeatmapConfig::default();
    let table = HeatmapTable::build(&[obs("A", "X", 5.0)], &config);

    assert!(table.domain.is_degenerate());
    let cell = table.cell("A", "X").unwrap();
    assert_eq!(cell.style.background, ColorScale::heat().degenerate);
    assert_eq!(cell.label, "5.0");
}

#[test]
fn duplicate_pair_keeps_the_last_value() {
    let matrix = PivotMatrix::from_observations(&[obs("A", "X", 10.0), obs("A", "X", 99.0)]);
    assert_eq!(matrix.rows().len(), 1);
    assert_eq!(matrix.cols().len(), 1);
    assert_eq!(matrix.get_by_key("A", "X"), Some(99.0));
}

#[test]
fn empty_observations_give_empty_outputs() {
    let index = CategoryIndex::from_observations(&[]);
    assert!(index.rows.is_empty());
    assert!(index.cols.is_empty());

    let matrix = PivotMatrix::from_observations(&[]);
    assert!(matrix.is_empty());

    let domain = ScaleDomain::from_values(matrix.present_values());
    assert!(domain.is_degenerate());

    let table = HeatmapTable::build(&[], &HeatmapConfig::default());
    assert!(table.is_empty());
    assert!(table.legend.is_empty());
}

#[test]
fn non_finite_values_stay_out_of_the_domain() {
    let observations = vec![
        obs("A", "X", 10.0),
        obs("A", "Y", f64::NAN),
        obs("B", "X", 30.0),
        obs("B", "Y", f64::INFINITY),
    ];
    let config = HeatmapConfig::default();
    let table = HeatmapTable::build(&observations, &config);

    assert_eq!((table.domain.min, table.domain.max), (10.0, 30.0));
    let nan_cell = table.cell("A", "Y").unwrap();
    assert!(!nan_cell.is_absent());
    assert_eq!(nan_cell.label, "NaN");
    assert_eq!(nan_cell.style.background, config.colors.absent);
}

#[test]
fn payload_with_nulls_shapes_every_chart() {
    let raw = r#"{
        "bottleneck": [
            {"traceId": 1, "activity": "Register", "wait_time": 4.0},
            {"traceId": 1, "activity": "Approve", "wait_time": 12.5},
            {"traceId": 2, "activity": "Register", "wait_time": null}
        ],
        "durations": [
            {"activity": "Register", "avg_duration": 3.0, "min_duration": 1.0, "max_duration": 6.0}
        ],
        "itemCosts": [
            {"instanceType": "Order", "avg_item_cost": 30.0},
            {"instanceType": "Invoice", "avg_item_cost": 10.0}
        ],
        "resource_bubble": [
            {"resource": "Clerk", "avg_cost": 20.0, "usage_count": 14},
            {"resource": "Manager", "avg_cost": 55.0, "usage_count": 3}
        ],
        "warnings": ["2 events had no timestamp"]
    }"#;
    let payload = AnalysisPayload::from_json(raw).unwrap();
    let mut cache = ChartCache::new();
    let charts = AnalysisCharts::from_payload(&payload, &ChartsConfig::default(), &mut cache);

    assert!(!charts.is_empty());
    assert_eq!(charts.heatmap.columns, vec!["Register", "Approve"]);
    let rows: Vec<&str> = charts.heatmap.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(rows, vec!["1", "2"]);
    assert!(charts.heatmap.cell("2", "Approve").unwrap().is_absent());

    assert_eq!(charts.bubbles.points.len(), 2);
    let shares: f64 = charts.item_costs.iter().map(|s| s.share).sum();
    assert!((shares - 1.0).abs() < 1e-9);

    let titles: Vec<&str> = charts.bars.iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["chart-durations"]);
    assert_eq!(charts.warnings, vec!["2 events had no timestamp"]);
}

#[test]
fn empty_payload_gives_empty_charts() {
    let payload = AnalysisPayload::from_json("{}").unwrap();
    let charts =
        AnalysisCharts::from_payload(&payload, &ChartsConfig::default(), &mut ChartCache::new());
    assert!(charts.is_empty());
    assert!(charts.bars.is_empty());
}
