use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{ChartPoint, PointId};

/// Opaque identifier for one account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque identifier for one dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DatasetId(Uuid);

impl DatasetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A named, user-owned collection of data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Stored data point. Immutable once created; creation order is the
/// rendering order for bar and line charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPointRecord {
    pub id: PointId,
    pub dataset_id: DatasetId,
    pub label: String,
    pub value: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&DataPointRecord> for ChartPoint {
    fn from(record: &DataPointRecord) -> Self {
        Self {
            id: record.id,
            label: record.label.clone(),
            value: record.value,
            category: record.category.clone(),
        }
    }
}

/// Candidate data point before insertion assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub category: String,
}

impl NewDataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
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
