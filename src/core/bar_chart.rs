use serde::{Deserialize, Serialize};

use crate::core::palette::Palette;
use crate::core::types::{ChartPoint, PointId, ValueRange};

/// Normalized bar geometry for one data point.
///
/// `height_fraction` is the bar height relative to the tallest drawable bar
/// and always lies in `[0, 1]` for finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub point_id: PointId,
    pub height_fraction: f64,
    pub color_index: usize,
}

/// Projects points into normalized bar geometry, preserving input order.
///
/// Values are min/max normalized over the sequence. A zero value range
/// (single point, or all values equal) maps every bar to the 0.5 midpoint
/// instead of dividing by zero. Empty input produces empty output.
#[must_use]
pub fn project_bar_geometry(points: &[ChartPoint], palette: &Palette) -> Vec<BarGeometry> {
    let Some(range) = ValueRange::of(points) else {
        return Vec::new();
    };
    let span = range.span();

    points
        .iter()
        .enumerate()
        .map(|(index, point)| BarGeometry {
            point_id: point.id,
            height_fraction: if span > 0.0 {
                (point.value - range.min) / span
            } else {
                0.5
            },
            color_index: palette.color_index(index),
        })
        .collect()
}
