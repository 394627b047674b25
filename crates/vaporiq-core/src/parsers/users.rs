//! Parser for users_synthetic.csv (TasteDNA columns, other columns ignored)

use super::{open, read_records};
use crate::error::CoreError;
use crate::models::TasteProfile;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn parse_users(path: &Path) -> Result<Vec<TasteProfile>, CoreError> {
    let users = parse_users_from(open(path)?, path)?;
    debug!(path = %path.display(), users = users.len(), "Parsed users");
    Ok(users)
}

pub fn parse_users_from<R: Read>(
    reader: R,
    path: &Path,
) -> Result<Vec<TasteProfile>, CoreError> {
    let users: Vec<TasteProfile> = read_records(reader, path)?;

    if let Some(idx) = users.iter().position(|u| !u.is_finite()) {
        return Err(CoreError::data(format!(
            "user row {} in {} has a non-finite affinity",
            idx + 2,
            path.display()
        )));
    }

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "user_id,TasteDNA_Fruity,TasteDNA_Dessert,TasteDNA_Menthol,Region\n\
                   u1,4.5,1,0.5,EU\n\
                   u2,0,5,2,US\n";
        let users = parse_users_from(csv.as_bytes(), Path::new("users.csv")).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], TasteProfile::new(4.5, 1.0, 0.5));
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "user_id,TasteDNA_Fruity,TasteDNA_Dessert\nu1,1,2\n";
        let err = parse_users_from(csv.as_bytes(), Path::new("users.csv")).unwrap_err();
        assert!(matches!(err, CoreError::CsvParse { .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let csv = "TasteDNA_Fruity,TasteDNA_Dessert,TasteDNA_Menthol\nNaN,1,2\n";
        let err = parse_users_from(csv.as_bytes(), Path::new("users.csv")).unwrap_err();
        assert!(matches!(err, CoreError::Data { .. }));
    }
}
