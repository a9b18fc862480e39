use dataviz_studio::api::{ChartEngine, ChartEngineConfig, ChartFrame, ChartKind};
use dataviz_studio::core::{CanvasSpec, ChartPoint, Palette, PieLayout};
use dataviz_studio::error::StudioError;

fn engine() -> ChartEngine {
    ChartEngine::new(ChartEngineConfig::default()).expect("engine init")
}

fn points(values: &[f64]) -> Vec<ChartPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ChartPoint::new(format!("p{i}"), v))
        .collect()
}

#[test]
fn empty_snapshot_yields_empty_frame_for_every_kind() {
    let engine = engine();
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let frame = engine.chart_frame(kind).expect("frame");
        assert_eq!(frame, ChartFrame::Empty);
        assert!(frame.is_empty());
    }
}

#[test]
fn set_points_drops_non_finite_values_but_keeps_order() {
    let mut engine = engine();
    let mut input = points(&[3.0, 1.0]);
    input.insert(1, ChartPoint::new("nan", f64::NAN));
    input.push(ChartPoint::new("inf", f64::INFINITY));

    engine.set_points(input.clone());

    assert_eq!(engine.points().len(), 2);
    assert_eq!(engine.points()[0].id, input[0].id);
    assert_eq!(engine.points()[1].id, input[2].id);
}

#[test]
fn set_points_never_sorts_by_value() {
    let mut engine = engine();
    let input = points(&[9.0, 1.0, 5.0]);
    engine.set_points(input.clone());

    let values: Vec<f64> = engine.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![9.0, 1.0, 5.0]);

    let frame = engine.chart_frame(ChartKind::Bar).expect("frame");
    let ChartFrame::Bars(bars) = frame else {
        panic!("expected bar frame");
    };
    let expected_ids: Vec<_> = input.iter().map(|p| p.id).collect();
    let actual_ids: Vec<_> = bars.iter().map(|b| b.point_id).collect();
    assert_eq!(actual_ids, expected_ids);
}

#[test]
fn append_point_rejects_non_finite_values() {
    let mut engine = engine();
    let result = engine.append_point(ChartPoint::new("bad", f64::NAN));
    assert!(matches!(result, Err(StudioError::InvalidData(_))));
    assert!(engine.points().is_empty());
}

#[test]
fn identical_snapshots_project_bit_identical_geometry() {
    let mut engine = engine();
    engine.set_points(points(&[2.0, 8.0, 5.0, 5.0]));

    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let first = engine.chart_frame(kind).expect("frame");
        let second = engine.chart_frame(kind).expect("frame");
        assert_eq!(first, second);
    }
}

#[test]
fn clear_points_returns_engine_to_empty_state() {
    let mut engine = engine();
    engine.set_points(points(&[1.0, 2.0]));
    engine.clear_points();
    assert_eq!(
        engine.chart_frame(ChartKind::Line).expect("frame"),
        ChartFrame::Empty
    );
}

#[test]
fn pie_frame_with_zero_total_carries_no_slices() {
    let mut engine = engine();
    engine.set_points(points(&[0.0, 0.0]));

    let frame = engine.chart_frame(ChartKind::Pie).expect("frame");
    let ChartFrame::Pie(slices) = &frame else {
        panic!("expected pie frame");
    };
    assert!(slices.is_empty());
    assert!(frame.is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ChartEngineConfig::default().with_canvas(CanvasSpec::new(10.0, 300.0, 40.0));
    assert!(matches!(
        ChartEngine::new(config),
        Err(StudioError::InvalidCanvas { .. })
    ));

    let config = ChartEngineConfig::default().with_pie_layout(PieLayout::new(30.0, 20.0));
    assert!(matches!(
        ChartEngine::new(config),
        Err(StudioError::InvalidData(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartEngineConfig::default()
        .with_canvas(CanvasSpec::new(1024.0, 512.0, 32.0))
        .with_pie_layout(PieLayout::new(400.0, 24.0));

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn config_defaults_apply_for_missing_json_fields() {
    let restored = ChartEngineConfig::from_json_str("{}").expect("parse");
    assert_eq!(restored, ChartEngineConfig::default());
    assert_eq!(restored.palette.len(), Palette::default().len());
}
