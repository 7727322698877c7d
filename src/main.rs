// Agenda Layout
// Command line front end: lays out an events file and prints JSON

use std::path::{Path, PathBuf};

use agenda_layout::models::event::Event;
use agenda_layout::models::layout::AgendaEntry;
use agenda_layout::models::settings::LayoutSettings;
use agenda_layout::services::layout::{
    condensed_agenda, layout_day, layout_week, segments_for_date, sorted_by_start, Clock,
    SystemClock, ViewOptions,
};
use agenda_layout::services::settings::SettingsService;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Parser)]
#[command(name = "agenda-layout")]
#[command(about = "Lay out agenda events into lanes on a time grid")]
struct Cli {
    /// Settings file (defaults to layout.toml in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a single day column
    Day {
        /// JSON array of events with id, start and end
        events: PathBuf,

        /// Day to lay out (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Lay out the week containing a date
    Week {
        events: PathBuf,

        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Condensed list of a day's events with free-time breaks
    Agenda {
        events: PathBuf,

        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Minimum idle minutes before a break is shown (overrides settings)
        #[arg(short, long)]
        threshold: Option<i64>,
    },
}

#[derive(Serialize)]
struct AgendaOutput {
    date: NaiveDate,
    entries: Vec<AgendaEntry>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let clock = SystemClock;
    let today = clock.now().date();

    let output = match cli.command {
        Commands::Day { events, date } => {
            let events = read_events(&events)?;
            let layout = layout_day(
                date.unwrap_or(today),
                &events,
                &ViewOptions::day(&settings),
                &clock,
            )?;
            serde_json::to_string_pretty(&layout)?
        }
        Commands::Week { events, date } => {
            let events = read_events(&events)?;
            let layout = layout_week(
                date.unwrap_or(today),
                settings.first_day_of_week,
                &events,
                &ViewOptions::week(&settings),
                &clock,
            )?;
            serde_json::to_string_pretty(&layout)?
        }
        Commands::Agenda {
            events,
            date,
            threshold,
        } => {
            let events = read_events(&events)?;
            for event in &events {
                event.validate()?;
            }
            let date = date.unwrap_or(today);
            let segments = segments_for_date(&events, date);
            let entries = condensed_agenda(
                &sorted_by_start(&segments),
                threshold.unwrap_or(settings.gap_threshold_minutes),
            );
            serde_json::to_string_pretty(&AgendaOutput { date, entries })?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<LayoutSettings> {
    match path {
        Some(path) => SettingsService::new(path)
            .load()
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(SettingsService::at_default_location()
            .map(|service| service.load_or_default())
            .unwrap_or_default()),
    }
}

fn read_events(path: &Path) -> Result<Vec<Event<Payload>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<Event<Payload>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
