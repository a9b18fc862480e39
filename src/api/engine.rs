use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    BarGeometry, ChartPoint, LineGeometry, PieSlice, project_bar_geometry,
    project_line_geometry, project_pie_geometry,
};
use crate::error::{StudioError, StudioResult};

use super::ChartEngineConfig;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Fully materialized geometry for one render pass.
///
/// `Empty` signals the caller to render its empty-state message instead of a
/// chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartFrame {
    Empty,
    Bars(Vec<BarGeometry>),
    Line(LineGeometry),
    Pie(Vec<PieSlice>),
}

impl ChartFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bars(bars) => bars.is_empty(),
            Self::Line(line) => line.is_empty(),
            Self::Pie(slices) => slices.is_empty(),
        }
    }
}

/// Geometry facade over a snapshot of the current point sequence.
///
/// The engine holds no storage or session state. Projection is a pure
/// function of the snapshot and the fixed configuration, so re-running it on
/// identical input yields bit-identical geometry.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: ChartEngineConfig,
    points: Vec<ChartPoint>,
}

impl ChartEngine {
    pub fn new(config: ChartEngineConfig) -> StudioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            points: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Replaces the point snapshot.
    ///
    /// Non-finite values are dropped with a warning; order is preserved and
    /// never sorted, since input order is the rendering order.
    pub fn set_points(&mut self, points: Vec<ChartPoint>) {
        let original_count = points.len();
        let points = canonicalize_points(points);
        debug!(
            original_count,
            canonical_count = points.len(),
            "set data points"
        );
        self.points = points;
    }

    /// Appends a single point to the snapshot.
    pub fn append_point(&mut self, point: ChartPoint) -> StudioResult<()> {
        if !point.value.is_finite() {
            return Err(StudioError::InvalidData(
                "point value must be finite".to_owned(),
            ));
        }
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
        Ok(())
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn project_bars(&self) -> Vec<BarGeometry> {
        project_bar_geometry(&self.points, &self.config.palette)
    }

    pub fn project_line(&self) -> StudioResult<LineGeometry> {
        project_line_geometry(&self.points, self.config.canvas)
    }

    pub fn project_pie(&self) -> StudioResult<Vec<PieSlice>> {
        project_pie_geometry(&self.points, self.config.pie, &self.config.palette)
    }

    /// Recomputes geometry for the requested chart kind.
    ///
    /// This is the explicit recompute entry point: callers invoke it after
    /// every confirmed mutation of the point sequence instead of relying on
    /// any hidden dependency tracking.
    pub fn chart_frame(&self, kind: ChartKind) -> StudioResult<ChartFrame> {
        if self.points.is_empty() {
            return Ok(ChartFrame::Empty);
        }
        Ok(match kind {
            ChartKind::Bar => ChartFrame::Bars(self.project_bars()),
            ChartKind::Line => ChartFrame::Line(self.project_line()?),
            ChartKind::Pie => ChartFrame::Pie(self.project_pie()?),
        })
    }
}

fn canonicalize_points(mut points: Vec<ChartPoint>) -> Vec<ChartPoint> {
    let original_len = points.len();
    points.retain(|point| point.value.is_finite());

    let filtered_count = original_len - points.len();
    if filtered_count > 0 {
        warn!(
            filtered_count,
            canonical_count = points.len(),
            "dropped non-finite values on set_points"
        );
    }
    points
}
