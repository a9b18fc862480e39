use serde::{Deserialize, Serialize};

use crate::core::palette::Palette;
use crate::core::path::PathDescriptor;
use crate::core::types::{ChartPoint, PieLayout, PointId};
use crate::error::StudioResult;

/// Slices below this share of the total get no on-slice label, only a legend
/// entry, to avoid label crowding on thin slices.
pub const LABEL_VISIBILITY_THRESHOLD_PCT: f64 = 5.0;

/// Anchor point for an on-slice percentage label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

/// Geometry for one pie slice.
///
/// Angles are in degrees, measured with the standard trig convention on
/// screen coordinates (y grows downward), so 0 points right and the layout
/// starts at -90 (12 o'clock) proceeding clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub point_id: PointId,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub percentage: f64,
    pub arc_path: PathDescriptor,
    pub label_anchor: Option<LabelAnchor>,
    pub color_index: usize,
}

/// Projects points into pie slices in input order.
///
/// Slice angles are proportional shares of the value total. A non-positive
/// total produces no slices. Negative values are not guarded and yield a
/// negative-angle slice, matching the unvalidated pass-through policy.
pub fn project_pie_geometry(
    points: &[ChartPoint],
    layout: PieLayout,
    palette: &Palette,
) -> StudioResult<Vec<PieSlice>> {
    layout.validate()?;

    let total: f64 = points.iter().map(|p| p.value).sum();
    if points.is_empty() || total <= 0.0 {
        return Ok(Vec::new());
    }

    let center = layout.center();
    let radius = layout.radius();
    let label_radius = radius * 0.7;

    let mut current_angle = -90.0;
    let mut slices = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let percentage = point.value / total * 100.0;
        let angle = point.value / total * 360.0;
        let start_angle = current_angle;
        let end_angle = current_angle + angle;

        let (start_x, start_y) = point_on_circle(center, radius, start_angle);
        let (end_x, end_y) = point_on_circle(center, radius, end_angle);

        let mut arc_path = PathDescriptor::with_capacity(4);
        arc_path.move_to(center, center);
        arc_path.line_to(start_x, start_y);
        arc_path.arc_to(radius, angle > 180.0, true, end_x, end_y);
        arc_path.close();

        let label_anchor = (percentage > LABEL_VISIBILITY_THRESHOLD_PCT).then(|| {
            let mid_angle = (start_angle + end_angle) / 2.0;
            let (x, y) = point_on_circle(center, label_radius, mid_angle);
            LabelAnchor { x, y }
        });

        current_angle = end_angle;

        slices.push(PieSlice {
            point_id: point.id,
            start_angle_deg: start_angle,
            end_angle_deg: end_angle,
            percentage,
            arc_path,
            label_anchor,
            color_index: palette.color_index(index),
        });
    }

    Ok(slices)
}

fn point_on_circle(center: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (center + radius * rad.cos(), center + radius * rad.sin())
}
