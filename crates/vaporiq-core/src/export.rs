//! Export functionality for forecasts and leaderboards
//!
//! CSV for spreadsheets, JSON for charting front ends.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::{ExtendedSeries, RankedFlavor};

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Export a projected series to CSV
///
/// CSV columns: date, mentions, kind (historical | projected)
///
/// # Examples
///
/// ```no_run
/// use vaporiq_core::analytics::ForecastEngine;
/// use vaporiq_core::export::export_forecast_to_csv;
/// use vaporiq_core::TrendStore;
/// use std::path::Path;
///
/// let store = TrendStore::default();
/// let series = ForecastEngine::new(&store).project("Icy Mint", 14, 1).unwrap();
/// export_forecast_to_csv(&series, Path::new("icy-mint.csv")).unwrap();
/// ```
pub fn export_forecast_to_csv(series: &ExtendedSeries, path: &Path) -> Result<()> {
    let mut writer = create_file(path)?;

    writeln!(writer, "date,mentions,kind").context("Failed to write CSV header")?;

    for (kind, point) in series.iter_tagged() {
        writeln!(
            writer,
            "{},{},{}",
            point.date.format("%Y-%m-%d"),
            point.mentions,
            kind.as_str()
        )
        .with_context(|| format!("Failed to write row for {}", point.date))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// Export a leaderboard to CSV
///
/// CSV columns: rank, flavor, mentions, date
pub fn export_leaderboard_to_csv(
    rows: &[RankedFlavor],
    date: NaiveDate,
    path: &Path,
) -> Result<()> {
    let mut writer = create_file(path)?;

    writeln!(writer, "rank,flavor,mentions,date").context("Failed to write CSV header")?;

    for (idx, row) in rows.iter().enumerate() {
        writeln!(
            writer,
            "{},\"{}\",{},{}",
            idx + 1,
            row.flavor.replace('"', "\"\""),
            row.mentions,
            date.format("%Y-%m-%d")
        )
        .with_context(|| format!("Failed to write row for {}", row.flavor))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// Export a projected series to pretty-printed JSON
pub fn export_forecast_to_json(series: &ExtendedSeries, path: &Path) -> Result<()> {
    let writer = create_file(path)?;

    serde_json::to_writer_pretty(writer, series)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastPoint;
    use tempfile::TempDir;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series() -> ExtendedSeries {
        let points = vec![
            ForecastPoint::new(d(1), 100),
            ForecastPoint::new(d(2), 110),
            ForecastPoint::new(d(3), 112),
        ];
        ExtendedSeries::new("Custard Kunafa", points, 2)
    }

    #[test]
    fn test_export_forecast_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/forecast.csv");

        export_forecast_to_csv(&series(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,mentions,kind");
        assert_eq!(lines[1], "2024-01-01,100,historical");
        assert_eq!(lines[3], "2024-01-03,112,projected");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_leaderboard_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("top.csv");
        let rows = vec![
            RankedFlavor {
                flavor: "B".to_string(),
                mentions: 80,
            },
            RankedFlavor {
                flavor: "C".to_string(),
                mentions: 80,
            },
        ];

        export_leaderboard_to_csv(&rows, d(5), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("rank,flavor,mentions,date\n"));
        assert!(content.contains("1,\"B\",80,2024-01-05"));
        assert!(content.contains("2,\"C\",80,2024-01-05"));
    }

    #[test]
    fn test_export_forecast_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("forecast.json");

        export_forecast_to_json(&series(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["flavor"], "Custard Kunafa");
        assert_eq!(value["history_len"], 2);
        assert_eq!(value["points"][2]["date"], "2024-01-03");
        assert_eq!(value["points"][2]["mentions"], 112);
    }
}
