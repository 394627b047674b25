//! Parser for flavor_trends.csv (`flavor,date,mentions`)

use super::{open, read_records};
use crate::error::CoreError;
use crate::models::TrendRecord;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse the trends file into raw records
///
/// Values are not validated here; `TrendStore::load` rejects negative
/// mentions and duplicate (flavor, date) pairs.
pub fn parse_trends(path: &Path) -> Result<Vec<TrendRecord>, CoreError> {
    let records = parse_trends_from(open(path)?, path)?;
    debug!(path = %path.display(), rows = records.len(), "Parsed trends");
    Ok(records)
}

pub fn parse_trends_from<R: Read>(
    reader: R,
    path: &Path,
) -> Result<Vec<TrendRecord>, CoreError> {
    read_records(reader, path)
}
