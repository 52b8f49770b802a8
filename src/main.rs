mod cli;
mod display;
mod error;
mod geocode;
mod prayer_times;
mod schedule;

use chrono::Local;
use clap::{CommandFactory, Parser};
use tracing::{Instrument, error, info, span};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Config, Location};
use crate::error::AppError;

/// Parses the flags, resolves the location, fetches today's timings and prints
/// the schedule. Failures are printed as a single line; the exit status is
/// success either way.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(config) = Cli::parse().into_config() else {
        println!("Please provide either --city or --lat and --lng");
        Cli::command().print_help()?;
        return Ok(());
    };

    match run(&config)
        .instrument(span!(tracing::Level::INFO, "run", method = config.method))
        .await
    {
        Ok(report) => print!("{report}"),
        Err(e) => {
            error!("Run failed: {:?}", e);
            println!("Error: {}", e);
        }
    }

    Ok(())
}

/// Performs the lookup and returns the rendered report.
async fn run(config: &Config) -> Result<String, AppError> {
    let coordinates = match &config.location {
        Location::City(city) => {
            geocode::geocode_city(
                &config.geocode_endpoint,
                config.maps_api_key.as_deref(),
                city,
            )
            .await?
        }
        Location::Coordinates(coordinates) => *coordinates,
    };

    let now = Local::now();
    let prayer_times = prayer_times::get_prayer_times(
        &config.prayer_endpoint,
        coordinates,
        config.method,
        now.date_naive(),
    )
    .await?;

    let timings = &prayer_times.data.timings;
    let prayers = schedule::chronological(timings, &now)?;
    let next = schedule::next_prayer(timings, &now)?;
    info!("Next prayer is {} in {}", next.name, next.remaining);

    Ok(display::render(
        &prayer_times,
        &prayers,
        &next,
        config.show_hijri,
    ))
}
