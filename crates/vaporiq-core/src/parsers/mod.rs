//! CSV parsers for the three vaporiq datasets
//!
//! All three files share one reader: headers required, fields trimmed,
//! unknown columns ignored, row numbers preserved in errors.

pub mod rules;
pub mod trends;
pub mod users;

pub use rules::parse_rules;
pub use trends::parse_trends;
pub use users::parse_users;

use crate::error::CoreError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Open a dataset file, mapping a missing file to `FileNotFound`
pub(crate) fn open(path: &Path) -> Result<File, CoreError> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Deserialize every row of a headed CSV stream
///
/// `path` only labels errors; the data comes from `reader`.
pub(crate) fn read_records<T, R>(reader: R, path: &Path) -> Result<Vec<T>, CoreError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        let row = result.map_err(|e| CoreError::CsvParse {
            path: path.to_path_buf(),
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}
