pub mod csv;
mod memory;
pub mod records;
pub mod session;

pub use memory::MemoryStore;
pub use records::{DataPointRecord, Dataset, DatasetId, NewDataPoint, UserId};
pub use session::AuthSession;

use crate::core::types::PointId;
use crate::error::StudioResult;

/// Contract implemented by any dataset/point storage backend.
///
/// Every operation is scoped to an owner so a hosted backend can map it onto
/// row-level access control. Listing order is part of the contract:
/// datasets newest first, points in creation order.
pub trait DataStore {
    fn create_dataset(
        &mut self,
        owner: UserId,
        name: &str,
        description: &str,
    ) -> StudioResult<Dataset>;

    fn list_datasets(&self, owner: UserId) -> StudioResult<Vec<Dataset>>;

    /// Deletes a dataset and every point it owns.
    fn delete_dataset(&mut self, owner: UserId, dataset_id: DatasetId) -> StudioResult<()>;

    fn insert_points(
        &mut self,
        owner: UserId,
        dataset_id: DatasetId,
        points: Vec<NewDataPoint>,
    ) -> StudioResult<Vec<DataPointRecord>>;

    fn list_points(
        &self,
        owner: UserId,
        dataset_id: DatasetId,
    ) -> StudioResult<Vec<DataPointRecord>>;

    fn delete_point(&mut self, owner: UserId, point_id: PointId) -> StudioResult<()>;
}
