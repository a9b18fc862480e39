use tracing::debug;

use crate::core::ChartPoint;
use crate::core::types::PointId;
use crate::error::{StudioError, StudioResult};
use crate::store::{
    AuthSession, DataPointRecord, DataStore, Dataset, DatasetId, NewDataPoint, UserId, csv,
};

use super::{ChartEngine, ChartEngineConfig, ChartFrame, ChartKind};

/// Single-user orchestration facade: datasets, data points, and charts.
///
/// Owns the injected storage capability, the ambient session, and one
/// [`ChartEngine`]. Every confirmed mutation of the selected dataset triggers
/// a full reload of its point sequence into the engine; there is no
/// incremental patching.
pub struct Studio<S: DataStore> {
    store: S,
    session: AuthSession,
    engine: ChartEngine,
    selected: Option<DatasetId>,
}

impl<S: DataStore> Studio<S> {
    pub fn new(store: S, session: AuthSession, config: ChartEngineConfig) -> StudioResult<Self> {
        Ok(Self {
            store,
            session,
            engine: ChartEngine::new(config)?,
            selected: None,
        })
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }

    #[must_use]
    pub fn selected_dataset(&self) -> Option<DatasetId> {
        self.selected
    }

    /// Points currently loaded for the selected dataset, in rendering order.
    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        self.engine.points()
    }

    pub fn create_dataset(&mut self, name: &str, description: &str) -> StudioResult<Dataset> {
        let owner = self.require_user()?;
        self.store.create_dataset(owner, name, description)
    }

    pub fn list_datasets(&self) -> StudioResult<Vec<Dataset>> {
        let owner = self.require_user()?;
        self.store.list_datasets(owner)
    }

    /// Deletes a dataset; if it was selected, the selection and the loaded
    /// point sequence are cleared.
    pub fn delete_dataset(&mut self, dataset_id: DatasetId) -> StudioResult<()> {
        let owner = self.require_user()?;
        self.store.delete_dataset(owner, dataset_id)?;
        if self.selected == Some(dataset_id) {
            self.clear_selection();
        }
        Ok(())
    }

    /// Selects a dataset and loads its points into the engine.
    pub fn select_dataset(&mut self, dataset_id: DatasetId) -> StudioResult<()> {
        let owner = self.require_user()?;
        // Ownership check happens inside list_points.
        let records = self.store.list_points(owner, dataset_id)?;
        self.selected = Some(dataset_id);
        self.load_records(records);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.engine.clear_points();
    }

    /// Adds one point to the selected dataset and reloads the sequence.
    pub fn add_point(&mut self, point: NewDataPoint) -> StudioResult<DataPointRecord> {
        if point.label.trim().is_empty() {
            return Err(StudioError::InvalidData(
                "point label must not be blank".to_owned(),
            ));
        }
        if !point.value.is_finite() {
            return Err(StudioError::InvalidData(
                "point value must be finite".to_owned(),
            ));
        }

        let owner = self.require_user()?;
        let dataset_id = self.selected.ok_or(StudioError::NoDatasetSelected)?;
        let mut inserted = self.store.insert_points(owner, dataset_id, vec![point])?;
        self.reload_points()?;
        Ok(inserted.remove(0))
    }

    /// Deletes one point from the selected dataset and reloads the sequence.
    pub fn delete_point(&mut self, point_id: PointId) -> StudioResult<()> {
        let owner = self.require_user()?;
        self.store.delete_point(owner, point_id)?;
        self.reload_points()
    }

    /// Imports CSV text into the selected dataset.
    ///
    /// Returns the number of points inserted. Malformed rows are skipped by
    /// ingestion; an import where no row parses inserts nothing.
    pub fn import_csv(&mut self, text: &str) -> StudioResult<usize> {
        let owner = self.require_user()?;
        let dataset_id = self.selected.ok_or(StudioError::NoDatasetSelected)?;

        let points = csv::parse_points(text)?;
        if points.is_empty() {
            return Ok(0);
        }
        let inserted = self.store.insert_points(owner, dataset_id, points)?;
        self.reload_points()?;
        debug!(%dataset_id, count = inserted.len(), "imported csv points");
        Ok(inserted.len())
    }

    /// Computes the current chart frame for the requested kind.
    pub fn chart(&self, kind: ChartKind) -> StudioResult<ChartFrame> {
        self.engine.chart_frame(kind)
    }

    fn require_user(&self) -> StudioResult<UserId> {
        self.session.require_user()
    }

    fn reload_points(&mut self) -> StudioResult<()> {
        let owner = self.require_user()?;
        let dataset_id = self.selected.ok_or(StudioError::NoDatasetSelected)?;
        let records = self.store.list_points(owner, dataset_id)?;
        self.load_records(records);
        Ok(())
    }

    fn load_records(&mut self, records: Vec<DataPointRecord>) {
        self.engine
            .set_points(records.iter().map(ChartPoint::from).collect());
    }
}
