use thiserror::Error;

use crate::core::types::PointId;
use crate::store::records::DatasetId;

pub type StudioResult<T> = Result<T, StudioError>;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("invalid canvas: width={width}, height={height}, padding={padding}")]
    InvalidCanvas {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("operation requires an authenticated session")]
    NotAuthenticated,

    #[error("dataset not found: {0}")]
    DatasetNotFound(DatasetId),

    #[error("data point not found: {0}")]
    PointNotFound(PointId),

    #[error("no dataset selected")]
    NoDatasetSelected,

    #[error("csv import failed: {0}")]
    CsvImport(String),
}
