//! Parser for compliance_rules.csv (`Country,MinAge,MaxNicotine_mgml`)

use super::{open, read_records};
use crate::error::CoreError;
use crate::models::ComplianceRule;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn parse_rules(path: &Path) -> Result<Vec<ComplianceRule>, CoreError> {
    let rules = parse_rules_from(open(path)?, path)?;
    debug!(path = %path.display(), rules = rules.len(), "Parsed compliance rules");
    Ok(rules)
}

pub fn parse_rules_from<R: Read>(
    reader: R,
    path: &Path,
) -> Result<Vec<ComplianceRule>, CoreError> {
    read_records(reader, path)
}
