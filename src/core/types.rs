use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StudioError, StudioResult};

/// Opaque identifier for one data point.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointId(Uuid);

impl PointId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One labeled observation as consumed by the geometry engine.
///
/// Input order is rendering order; the engine never reorders points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub id: PointId,
    pub label: String,
    pub value: f64,
    pub category: String,
}

impl ChartPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            id: PointId::new(),
            label: label.into(),
            value,
            category: String::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Drawing surface for line charts, in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CanvasSpec {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.padding.is_finite()
            && self.padding >= 0.0
            && self.width > 2.0 * self.padding
            && self.height > 2.0 * self.padding
    }

    pub fn validate(self) -> StudioResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(StudioError::InvalidCanvas {
                width: self.width,
                height: self.height,
                padding: self.padding,
            })
        }
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::new(800.0, 300.0, 40.0)
    }
}

/// Square layout for pie charts: `size` edge length with `margin` kept clear
/// around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub size: f64,
    pub margin: f64,
}

impl PieLayout {
    #[must_use]
    pub const fn new(size: f64, margin: f64) -> Self {
        Self { size, margin }
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.size / 2.0
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.size / 2.0 - self.margin
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.size.is_finite()
            && self.margin.is_finite()
            && self.margin >= 0.0
            && self.radius() > 0.0
    }

    pub fn validate(self) -> StudioResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(StudioError::InvalidData(format!(
                "invalid pie layout: size={}, margin={}",
                self.size, self.margin
            )))
        }
    }
}

impl Default for PieLayout {
    fn default() -> Self {
        Self::new(300.0, 20.0)
    }
}

/// Closed min/max interval over the values of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scans a point sequence for its value extremes.
    ///
    /// Returns `None` for an empty sequence. Uses total ordering so the scan
    /// stays deterministic even if a non-finite value slips past ingestion.
    #[must_use]
    pub fn of(points: &[ChartPoint]) -> Option<Self> {
        let min = points.iter().map(|p| OrderedFloat(p.value)).min()?;
        let max = points.iter().map(|p| OrderedFloat(p.value)).max()?;
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
