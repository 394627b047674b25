//! vaporiq - Flavor trend dashboard in the terminal

mod cli;

use anyhow::{Context, Result};
use chrono::Timelike;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;
use vaporiq_core::analytics::summarize_flavors;
use vaporiq_core::models::TasteProfile;
use vaporiq_core::{
    dataset, export_forecast_to_csv, export_forecast_to_json, export_leaderboard_to_csv,
    suggest_blend, Dataset, ForecastEngine, LimitedDrops, Mood, Settings, TasteQuiz,
};

#[derive(Parser)]
#[command(
    name = "vaporiq",
    version,
    about = "Flavor trend dashboard with synthetic data",
    long_about = "Terminal dashboard over synthetic flavor trend data.\n\
                  \n\
                  Views:\n\
                    • Flavor Forecast: history plus a naive linear projection\n\
                    • Limited Drops: today's leaderboard and the exclusive flavor\n\
                    • TasteDNA: k-means taste cluster and recommendations\n\
                    • MoodSync: a blend for the current mood\n\
                    • Compliance: age and nicotine limits per country\n\
                  \n\
                  Examples:\n\
                    vaporiq flavors                          # List flavors with trend direction\n\
                    vaporiq forecast \"Icy Mint\" --horizon 7  # Project one flavor\n\
                    vaporiq top 3 --export top.csv           # Leaderboard, exported to CSV\n\
                    vaporiq quiz --fruity 4 --dessert 1      # TasteDNA quiz\n\
                    vaporiq mood stressed                    # MoodSync\n\
                    vaporiq compliance UAE --age 20          # Compliance check\n\
                  \n\
                  Environment Variables:\n\
                    VAPORIQ_DATA_DIR                 # Directory holding the CSV tables\n\
                    VAPORIQ_CONFIG                   # Settings file (TOML)\n\
                    VAPORIQ_NO_COLOR                 # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: vaporiq=info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory containing flavor_trends.csv, users_synthetic.csv, compliance_rules.csv
    #[arg(long, env = "VAPORIQ_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Settings file (default: <data-dir>/vaporiq.toml, if present)
    #[arg(long, env = "VAPORIQ_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "VAPORIQ_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List flavors with their trend direction
    Flavors,
    /// Show history and projection for one flavor
    Forecast {
        /// Flavor name (default: the featured flavor)
        flavor: Option<String>,
        /// Days to project (default from settings)
        #[arg(long)]
        horizon: Option<u32>,
        /// Growth per projected day (default: per-flavor setting)
        #[arg(long)]
        boost: Option<u64>,
        /// Write the series to a .csv or .json file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show the top flavors on the latest date
    Top {
        /// Number of flavors (default from settings)
        n: Option<usize>,
        /// Write the leaderboard to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show limited drops: leaderboard plus today's exclusive
    Drops,
    /// Take the TasteDNA quiz
    Quiz {
        /// Fruity affinity (0-5)
        #[arg(long, default_value = "3")]
        fruity: f64,
        /// Dessert affinity (0-5)
        #[arg(long, default_value = "3")]
        dessert: f64,
        /// Menthol affinity (0-5)
        #[arg(long, default_value = "2")]
        menthol: f64,
    },
    /// Suggest a blend for a mood (Energised, Neutral, Stressed, Tired)
    Mood {
        mood: String,
        /// Hour of day, 0-23 (default: now)
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Check age and nicotine limits for a country
    Compliance {
        country: String,
        /// Your age
        #[arg(long, default_value = "25")]
        age: u32,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vaporiq=info,vaporiq_core=info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    let settings = load_settings(&cli.data_dir, cli.config.as_deref())?;
    let data = load_dataset(&cli.data_dir)?;
    let out = cli::Output {
        json: cli.json,
        no_color: cli.no_color,
    };

    match cli.command {
        Command::Flavors => {
            let summaries = summarize_flavors(&data.trends);
            println!("{}", cli::format_flavors(&summaries, out));
        }
        Command::Forecast {
            flavor,
            horizon,
            boost,
            export,
        } => {
            let flavor = flavor.unwrap_or_else(|| settings.forecast.featured_flavor.clone());
            let horizon = horizon.unwrap_or(settings.forecast.horizon_days);
            let boost = boost.unwrap_or_else(|| settings.forecast.boost_for(&flavor));

            let series = ForecastEngine::new(&data.trends)
                .project(&flavor, horizon, boost)
                .with_context(|| format!("Cannot forecast '{}'", flavor))?;

            if let Some(path) = export {
                let is_json = path.extension().is_some_and(|ext| ext == "json");
                if is_json {
                    export_forecast_to_json(&series, &path)?;
                } else {
                    export_forecast_to_csv(&series, &path)?;
                }
                eprintln!("Exported forecast to {}", path.display());
            }

            println!("{}", cli::format_forecast(&series, out));
        }
        Command::Top { n, export } => {
            let n = n.unwrap_or(settings.drops.leaderboard_size);
            let engine = ForecastEngine::new(&data.trends);
            let rows = engine.top_n(n).context("Cannot build leaderboard")?;
            let date = data.trends.latest_date()?;

            if let Some(path) = export {
                export_leaderboard_to_csv(&rows, date, &path)?;
                eprintln!("Exported leaderboard to {}", path.display());
            }

            println!("{}", cli::format_leaderboard(&rows, date, out));
        }
        Command::Drops => {
            let engine = ForecastEngine::new(&data.trends);
            let drops =
                LimitedDrops::compute(&engine, &settings.drops).context("Cannot compute drops")?;
            println!("{}", cli::format_drops(&drops, out));
        }
        Command::Quiz {
            fruity,
            dessert,
            menthol,
        } => {
            let quiz = TasteQuiz::fit(&data.users, &settings.quiz)
                .context("TasteDNA quiz needs users_synthetic.csv")?;
            let result = quiz.recommend(TasteProfile::new(fruity, dessert, menthol))?;
            println!("{}", cli::format_quiz(&result, out));
        }
        Command::Mood { mood, hour } => {
            let mood: Mood = mood.parse()?;
            let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
            let suggestion = suggest_blend(mood, hour, &settings.mood)?;
            println!("{}", cli::format_blend(&suggestion, out));
        }
        Command::Compliance { country, age } => {
            let verdict = data.rules.check(&country, age)?;
            println!("{}", cli::format_verdict(&verdict, out));
        }
    }

    Ok(())
}

fn load_settings(data_dir: &Path, config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            let path = data_dir.join("vaporiq.toml");
            Settings::load_or_default(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
    }
}

/// Load the dataset once and install it as the process-wide dataset
fn load_dataset(data_dir: &Path) -> Result<Arc<Dataset>> {
    let (data, report) = Dataset::load_dir(data_dir)
        .with_context(|| format!("Failed to load dataset from {}", data_dir.display()))?;

    for warning in report.warnings() {
        warn!(source = %warning.source, "{}", warning.message);
        if let Some(suggestion) = &warning.suggestion {
            debug!(source = %warning.source, "{}", suggestion);
        }
    }
    for failure in report.errors() {
        error!(source = %failure.source, "{}", failure.message);
        if let Some(suggestion) = &failure.suggestion {
            debug!(source = %failure.source, "{}", suggestion);
        }
    }

    Ok(dataset::install(data)?)
}
