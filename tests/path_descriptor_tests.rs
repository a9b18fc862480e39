use dataviz_studio::core::{ChartPoint, Palette, PathDescriptor, project_bar_geometry};
use dataviz_studio::error::StudioError;

#[test]
fn svg_path_formats_commands_in_order() {
    let mut path = PathDescriptor::new();
    path.move_to(150.0, 150.0);
    path.line_to(150.0, 20.0);
    path.arc_to(130.0, false, true, 280.0, 150.0);
    path.close();

    assert_eq!(
        path.to_svg_path(),
        "M 150 150 L 150 20 A 130 130 0 0 1 280 150 Z"
    );
}

#[test]
fn path_validation_rejects_non_finite_coordinates() {
    let mut path = PathDescriptor::new();
    path.move_to(0.0, 0.0);
    path.line_to(f64::NAN, 10.0);

    assert!(matches!(
        path.validate(),
        Err(StudioError::InvalidData(_))
    ));
}

#[test]
fn custom_palettes_cycle_by_their_own_length() {
    let palette = Palette::new(vec!["#111111".to_owned(), "#222222".to_owned()])
        .expect("two-token palette");
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.token(0), "#111111");
    assert_eq!(palette.token(3), "#222222");

    let points: Vec<ChartPoint> = (0..5)
        .map(|i| ChartPoint::new(format!("p{i}"), i as f64))
        .collect();
    let bars = project_bar_geometry(&points, &palette);
    let indices: Vec<usize> = bars.iter().map(|b| b.color_index).collect();
    assert_eq!(indices, vec![0, 1, 0, 1, 0]);
}

#[test]
fn empty_palettes_are_rejected() {
    assert!(matches!(
        Palette::new(Vec::new()),
        Err(StudioError::InvalidData(_))
    ));
}
