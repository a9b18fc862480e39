//! CSV ingestion: raw text into candidate data points.
//!
//! Expected layout is a header row followed by `label,value[,category]` rows.
//! Malformed rows are skipped, not fatal: this is the ingestion boundary
//! where the finite-value policy is enforced, so nothing downstream has to
//! re-check values.

use tracing::warn;

use crate::error::{StudioError, StudioResult};
use crate::store::records::NewDataPoint;

/// Parses CSV text into candidate points.
///
/// Rows with a blank label or a value that does not parse to a finite number
/// are counted and skipped. Returns an error only when the text itself is not
/// readable as CSV.
pub fn parse_points(text: &str) -> StudioResult<Vec<NewDataPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut points = Vec::new();
    let mut skipped = 0_usize;
    for record in reader.records() {
        let record = record.map_err(|e| StudioError::CsvImport(e.to_string()))?;

        let label = record.get(0).unwrap_or_default();
        let raw_value = record.get(1).unwrap_or_default();
        let category = record.get(2).unwrap_or_default();

        let value = raw_value.parse::<f64>().ok().filter(|v| v.is_finite());
        match value {
            Some(value) if !label.is_empty() => {
                points.push(NewDataPoint {
                    label: label.to_owned(),
                    value,
                    category: category.to_owned(),
                });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, parsed = points.len(), "skipped malformed csv rows");
    }
    Ok(points)
}
