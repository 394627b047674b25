//! Terminal rendering for the dashboard views
//!
//! Every formatter returns either a comfy-table rendering or pretty JSON.

use chrono::NaiveDate;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use vaporiq_core::analytics::{FlavorSummary, TrendDirection};
use vaporiq_core::models::{ExtendedSeries, PointKind, RankedFlavor};
use vaporiq_core::{BlendSuggestion, ComplianceVerdict, LimitedDrops, QuizResult};

/// Output switches shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub no_color: bool,
}

// ============================================================================
// Formatters
// ============================================================================

/// Flavor picker: one row per flavor with its direction of travel
pub fn format_flavors(summaries: &[FlavorSummary], out: Output) -> String {
    if out.json {
        return to_json(summaries);
    }

    if summaries.is_empty() {
        return "No flavors found.".to_string();
    }

    let mut table = new_table(
        &["Flavor", "Days", "Latest", "Peak", "Trend", "Last Seen"],
        out,
    );

    for s in summaries {
        let trend = s.direction.label();
        let trend_cell = match (out.no_color, s.direction) {
            (false, TrendDirection::Up(_)) => Cell::new(trend).fg(Color::Green),
            (false, TrendDirection::Down(_)) => Cell::new(trend).fg(Color::Red),
            _ => Cell::new(trend),
        };
        table.add_row(vec![
            Cell::new(&s.flavor),
            Cell::new(s.days_observed),
            Cell::new(format_mentions(s.latest_mentions)),
            Cell::new(format_mentions(s.peak_mentions)),
            trend_cell,
            Cell::new(s.last_date),
        ]);
    }

    table.to_string()
}

/// History + projection for one flavor
pub fn format_forecast(series: &ExtendedSeries, out: Output) -> String {
    if out.json {
        return to_json(series);
    }

    let mut table = new_table(&["Date", "Mentions", "Kind"], out);

    for (kind, point) in series.iter_tagged() {
        let kind_cell = match (out.no_color, kind) {
            (false, PointKind::Projected) => Cell::new(kind.as_str()).fg(Color::Magenta),
            _ => Cell::new(kind.as_str()),
        };
        table.add_row(vec![
            Cell::new(point.date),
            Cell::new(point.mentions),
            kind_cell,
        ]);
    }

    format!(
        "Trend & Forecast for {}\n{} observed, {} projected\n{}",
        series.flavor(),
        series.history().len(),
        series.projection().len(),
        table
    )
}

pub fn format_leaderboard(rows: &[RankedFlavor], date: NaiveDate, out: Output) -> String {
    if out.json {
        #[derive(Serialize)]
        struct Leaderboard<'a> {
            date: NaiveDate,
            rows: &'a [RankedFlavor],
        }
        return to_json(&Leaderboard { date, rows });
    }

    format!("Top flavors on {}\n{}", date, leaderboard_table(rows, out))
}

pub fn format_drops(drops: &LimitedDrops, out: Output) -> String {
    if out.json {
        return to_json(drops);
    }

    let mut lines = vec![
        format!("Limited Drops for {}", drops.date),
        leaderboard_table(&drops.leaderboard, out),
    ];
    if let Some(exclusive) = &drops.exclusive {
        lines.push(String::new());
        lines.push(format!("Today's Exclusive: {}", exclusive));
    }

    lines.join("\n")
}

pub fn format_quiz(result: &QuizResult, out: Output) -> String {
    if out.json {
        return to_json(result);
    }

    let p = &result.profile;
    [
        format!(
            "TasteDNA:          fruity {:.1}, dessert {:.1}, menthol {:.1}",
            p.fruity, p.dessert, p.menthol
        ),
        format!("Taste Cluster:     {}", result.cluster),
        format!("Recommended:       {}", result.recommendations.join(", ")),
    ]
    .join("\n")
}

pub fn format_blend(suggestion: &BlendSuggestion, out: Output) -> String {
    if out.json {
        return to_json(suggestion);
    }

    [
        format!("Mood:              {}", suggestion.mood),
        format!("Hour:              {:02}:00", suggestion.hour),
        format!("Suggested blend:   {}", suggestion.flavor),
    ]
    .join("\n")
}

pub fn format_verdict(verdict: &ComplianceVerdict, out: Output) -> String {
    if out.json {
        return to_json(verdict);
    }

    let status = if verdict.allowed {
        "Age verified."
    } else {
        "Too young to vape here."
    };

    let rule = &verdict.rule;
    [
        format!("Country:           {}", rule.country),
        format!("Min age:           {}", rule.min_age),
        format!("Max nicotine:      {} mg/mL", rule.max_nicotine_mgml),
        format!("Age:               {}", verdict.age),
        status.to_string(),
    ]
    .join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

fn new_table(headers: &[&str], out: Output) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if out.no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    table
}

fn leaderboard_table(rows: &[RankedFlavor], out: Output) -> String {
    if rows.is_empty() {
        return "No flavors observed.".to_string();
    }

    let mut table = new_table(&["#", "Flavor", "Mentions"], out);
    for (idx, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&row.flavor),
            Cell::new(row.mentions),
        ]);
    }
    table.to_string()
}

fn format_mentions(mentions: u64) -> String {
    if mentions >= 1_000_000 {
        format!("{:.1}M", mentions as f64 / 1_000_000.0)
    } else if mentions >= 1_000 {
        format!("{:.1}K", mentions as f64 / 1_000.0)
    } else {
        mentions.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
