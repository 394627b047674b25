//! Dataset loading and the process-wide dataset slot
//!
//! A [`Dataset`] bundles the three input tables. The frontend loads one at
//! startup, installs it, and every view reads the same `Arc<Dataset>`.
//! Installed datasets are never mutated; `reload` swaps in a new one.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::compliance::ComplianceBook;
use crate::error::{CoreError, LoadError, LoadReport};
use crate::models::TasteProfile;
use crate::parsers::{parse_rules, parse_trends, parse_users};
use crate::store::TrendStore;

pub const TRENDS_FILE: &str = "flavor_trends.csv";
pub const USERS_FILE: &str = "users_synthetic.csv";
pub const RULES_FILE: &str = "compliance_rules.csv";

/// Everything the dashboard views read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub trends: TrendStore,
    pub users: Vec<TasteProfile>,
    pub rules: ComplianceBook,
    /// Directory the tables came from, if loaded from disk
    pub source: Option<PathBuf>,
}

impl Dataset {
    /// Load the three tables from `dir`
    ///
    /// The trends table is required: any failure there is returned as an
    /// error. Missing or broken users/rules tables are recorded in the
    /// report and leave the corresponding part of the dataset empty.
    pub fn load_dir(dir: &Path) -> Result<(Self, LoadReport), CoreError> {
        let mut report = LoadReport::new();

        info!(dir = %dir.display(), "Loading dataset");

        let trends = TrendStore::load(parse_trends(&dir.join(TRENDS_FILE))?)?;
        report.trends_loaded = true;
        report.observations = trends.observation_count();
        report.flavors = trends.flavor_count();

        let users = match parse_users(&dir.join(USERS_FILE)) {
            Ok(users) => {
                report.users_loaded = true;
                users
            }
            Err(e) => {
                record_optional_failure(&mut report, "users", &e);
                Vec::new()
            }
        };

        let rules = match parse_rules(&dir.join(RULES_FILE)) {
            Ok(rules) => {
                report.rules_loaded = true;
                ComplianceBook::from_rules(rules)
            }
            Err(e) => {
                record_optional_failure(&mut report, "rules", &e);
                ComplianceBook::default()
            }
        };

        info!(
            flavors = report.flavors,
            observations = report.observations,
            users = users.len(),
            countries = rules.len(),
            errors = report.errors.len(),
            "Dataset load complete"
        );

        Ok((
            Self {
                trends,
                users,
                rules,
                source: Some(dir.to_path_buf()),
            },
            report,
        ))
    }
}

fn record_optional_failure(report: &mut LoadReport, source: &str, error: &CoreError) {
    warn!(source, error = %error, "Optional dataset unavailable");
    match error {
        CoreError::FileNotFound { path } => report.add_error(
            LoadError::warning(source, error.to_string())
                .with_suggestion(format!("Provide {} to enable this view", path.display())),
        ),
        _ => report.add_error(LoadError::from_core_error(source, error)),
    }
}

static CURRENT: Lazy<RwLock<Option<Arc<Dataset>>>> = Lazy::new(|| RwLock::new(None));

/// Install the startup dataset; fails if one is already installed
pub fn install(dataset: Dataset) -> Result<Arc<Dataset>, CoreError> {
    let mut slot = CURRENT.write();
    if slot.is_some() {
        return Err(CoreError::DatasetAlreadyLoaded);
    }
    let dataset = Arc::new(dataset);
    *slot = Some(Arc::clone(&dataset));
    Ok(dataset)
}

/// The installed dataset
pub fn current() -> Result<Arc<Dataset>, CoreError> {
    CURRENT.read().clone().ok_or(CoreError::DatasetNotLoaded)
}

/// Replace the installed dataset, returning the new one
///
/// Readers holding the previous `Arc` keep seeing the old data.
pub fn reload(dataset: Dataset) -> Arc<Dataset> {
    let dataset = Arc::new(dataset);
    *CURRENT.write() = Some(Arc::clone(&dataset));
    info!("Dataset reloaded");
    dataset
}

/// Remove the installed dataset
pub fn clear() {
    *CURRENT.write() = None;
}
