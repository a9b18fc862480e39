use chrono::Utc;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::types::PointId;
use crate::error::{StudioError, StudioResult};
use crate::store::DataStore;
use crate::store::records::{DataPointRecord, Dataset, DatasetId, NewDataPoint, UserId};

/// In-memory reference implementation of [`DataStore`].
///
/// Map iteration order is insertion order, which makes creation order fall
/// out of the storage layout instead of requiring a timestamp sort.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datasets: IndexMap<DatasetId, Dataset>,
    points: IndexMap<PointId, DataPointRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn owned_dataset(&self, owner: UserId, dataset_id: DatasetId) -> StudioResult<&Dataset> {
        let dataset = self
            .datasets
            .get(&dataset_id)
            .ok_or(StudioError::DatasetNotFound(dataset_id))?;
        if dataset.owner != owner {
            return Err(StudioError::DatasetNotFound(dataset_id));
        }
        Ok(dataset)
    }
}

impl DataStore for MemoryStore {
    fn create_dataset(
        &mut self,
        owner: UserId,
        name: &str,
        description: &str,
    ) -> StudioResult<Dataset> {
        if name.trim().is_empty() {
            return Err(StudioError::InvalidData(
                "dataset name must not be blank".to_owned(),
            ));
        }

        let dataset = Dataset {
            id: DatasetId::new(),
            owner,
            name: name.to_owned(),
            description: description.to_owned(),
            created_at: Utc::now(),
        };
        debug!(dataset_id = %dataset.id, name, "create dataset");
        self.datasets.insert(dataset.id, dataset.clone());
        Ok(dataset)
    }

    fn list_datasets(&self, owner: UserId) -> StudioResult<Vec<Dataset>> {
        // Newest first, mirroring creation-time descending order.
        Ok(self
            .datasets
            .values()
            .rev()
            .filter(|dataset| dataset.owner == owner)
            .cloned()
            .collect())
    }

    fn delete_dataset(&mut self, owner: UserId, dataset_id: DatasetId) -> StudioResult<()> {
        self.owned_dataset(owner, dataset_id)?;
        self.datasets.shift_remove(&dataset_id);
        let before = self.points.len();
        self.points.retain(|_, point| point.dataset_id != dataset_id);
        debug!(
            %dataset_id,
            cascaded_points = before - self.points.len(),
            "delete dataset"
        );
        Ok(())
    }

    fn insert_points(
        &mut self,
        owner: UserId,
        dataset_id: DatasetId,
        points: Vec<NewDataPoint>,
    ) -> StudioResult<Vec<DataPointRecord>> {
        self.owned_dataset(owner, dataset_id)?;

        let created_at = Utc::now();
        let mut inserted = Vec::with_capacity(points.len());
        for point in points {
            let record = DataPointRecord {
                id: PointId::new(),
                dataset_id,
                label: point.label,
                value: point.value,
                category: point.category,
                created_at,
            };
            self.points.insert(record.id, record.clone());
            inserted.push(record);
        }
        debug!(%dataset_id, count = inserted.len(), "insert points");
        Ok(inserted)
    }

    fn list_points(
        &self,
        owner: UserId,
        dataset_id: DatasetId,
    ) -> StudioResult<Vec<DataPointRecord>> {
        self.owned_dataset(owner, dataset_id)?;
        // Insertion order == creation order, ascending.
        Ok(self
            .points
            .values()
            .filter(|point| point.dataset_id == dataset_id)
            .cloned()
            .collect())
    }

    fn delete_point(&mut self, owner: UserId, point_id: PointId) -> StudioResult<()> {
        let record = self
            .points
            .get(&point_id)
            .ok_or(StudioError::PointNotFound(point_id))?;
        self.owned_dataset(owner, record.dataset_id)?;
        self.points.shift_remove(&point_id);
        debug!(%point_id, "delete point");
        Ok(())
    }
}
