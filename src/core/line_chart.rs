use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::path::PathDescriptor;
use crate::core::types::{CanvasSpec, ChartPoint, PointId, ValueRange};
use crate::error::StudioResult;

/// Vertical-span ratios at which horizontal gridlines are emitted.
pub const GRIDLINE_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Projected line vertex in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineVertex {
    pub point_id: PointId,
    pub x: f64,
    pub y: f64,
}

/// One horizontal gridline with the data value it marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub y: f64,
    pub value: f64,
}

/// Deterministic geometry for a line chart.
///
/// `stroke_path` is the open polyline through the vertices.
/// `fill_path` extends the stroke down to the baseline and closes it, for the
/// area-fill-under-line effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub vertices: Vec<LineVertex>,
    pub stroke_path: PathDescriptor,
    pub fill_path: PathDescriptor,
    pub gridlines: SmallVec<[Gridline; 5]>,
}

impl LineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            stroke_path: PathDescriptor::new(),
            fill_path: PathDescriptor::new(),
            gridlines: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Projects points into deterministic line-chart geometry.
///
/// Vertices follow input order; the path is never sorted by value. A single
/// point lands at the left padding edge, and a zero value range places every
/// vertex on the vertical midline. Gridline count is always exactly five for
/// non-empty input; with a zero range all five carry the same value.
pub fn project_line_geometry(
    points: &[ChartPoint],
    canvas: CanvasSpec,
) -> StudioResult<LineGeometry> {
    canvas.validate()?;

    let Some(range) = ValueRange::of(points) else {
        return Ok(LineGeometry::empty());
    };
    let span = range.span();

    let inner_width = canvas.width - 2.0 * canvas.padding;
    let inner_height = canvas.height - 2.0 * canvas.padding;
    let baseline_y = canvas.height - canvas.padding;
    let x_step_divisor = (points.len() - 1).max(1) as f64;

    let mut vertices = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let x = canvas.padding + (index as f64 / x_step_divisor) * inner_width;
        let y = if span > 0.0 {
            baseline_y - ((point.value - range.min) / span) * inner_height
        } else {
            canvas.height / 2.0
        };
        vertices.push(LineVertex {
            point_id: point.id,
            x,
            y,
        });
    }

    let mut stroke_path = PathDescriptor::with_capacity(vertices.len());
    stroke_path.move_to(vertices[0].x, vertices[0].y);
    for vertex in &vertices[1..] {
        stroke_path.line_to(vertex.x, vertex.y);
    }

    let mut fill_path = PathDescriptor::with_capacity(vertices.len() + 3);
    fill_path.move_to(vertices[0].x, vertices[0].y);
    for vertex in &vertices[1..] {
        fill_path.line_to(vertex.x, vertex.y);
    }
    fill_path.line_to(vertices[vertices.len() - 1].x, baseline_y);
    fill_path.line_to(vertices[0].x, baseline_y);
    fill_path.close();

    let gridlines = GRIDLINE_RATIOS
        .iter()
        .map(|&ratio| Gridline {
            y: canvas.padding + ratio * inner_height,
            value: range.max - ratio * span,
        })
        .collect();

    Ok(LineGeometry {
        vertices,
        stroke_path,
        fill_path,
        gridlines,
    })
}
