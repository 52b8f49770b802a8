use clap::Parser;

use crate::geocode::{Coordinates, GEOCODE_ENDPOINT};
use crate::prayer_times::PRAYER_TIMES_ENDPOINT;

/// Prints today's Islamic prayer times and a countdown to the next prayer.
#[derive(Parser, Debug)]
#[command(name = "athan", version, long_about = None)]
pub struct Cli {
    /// City name for prayer times (needs GOOGLE_MAPS_API_KEY)
    #[arg(long)]
    pub city: Option<String>,

    /// Latitude for prayer times
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude for prayer times
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lng: f64,

    /// Calculation method
    #[arg(long, default_value_t = 19)]
    pub method: i32,

    /// Also print the Hijri date
    #[arg(long)]
    pub hijri: bool,

    /// API key for the geocoding service
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub maps_api_key: Option<String>,

    #[arg(long, default_value = GEOCODE_ENDPOINT, hide = true)]
    pub geocode_endpoint: String,

    #[arg(long, default_value = PRAYER_TIMES_ENDPOINT, hide = true)]
    pub prayer_endpoint: String,
}

/// Where the prayer times should be computed for.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    City(String),
    Coordinates(Coordinates),
}

/// Settings handed to the lookup after flags are parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub location: Location,
    pub method: i32,
    pub show_hijri: bool,
    pub maps_api_key: Option<String>,
    pub geocode_endpoint: String,
    pub prayer_endpoint: String,
}

impl Cli {
    /// A non-empty city wins; otherwise both coordinates must be non-zero.
    pub fn location(&self) -> Option<Location> {
        match self.city.as_deref() {
            Some(city) if !city.is_empty() => Some(Location::City(city.to_string())),
            _ if self.lat != 0.0 && self.lng != 0.0 => Some(Location::Coordinates(Coordinates {
                latitude: self.lat,
                longitude: self.lng,
            })),
            _ => None,
        }
    }

    /// Builds the run configuration, or `None` when no location was given.
    pub fn into_config(self) -> Option<Config> {
        let location = self.location()?;
        Some(Config {
            location,
            method: self.method,
            show_hijri: self.hijri,
            maps_api_key: self.maps_api_key,
            geocode_endpoint: self.geocode_endpoint,
            prayer_endpoint: self.prayer_endpoint,
        })
    }
}
