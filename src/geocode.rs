// Module containing response data structures for the geocoding API
mod response;

use crate::error::AppError;
use tracing::{debug, error, info};

// API endpoint for the Google Maps geocoding service
pub const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolves a city name to coordinates using the Google Maps geocoding API.
///
/// # Arguments
/// * `endpoint` - Geocoding endpoint URL, normally [`GEOCODE_ENDPOINT`]
/// * `api_key` - The API key for the geocoding service, if one is configured
/// * `city` - Free-form address or city name (e.g., "Istanbul")
///
/// # Returns
/// * `Coordinates` of the first result
/// * `AppError::Config` when no key is configured, `AppError::NotFound` when
///   the service knows no such place
pub async fn geocode_city(
    endpoint: &str,
    api_key: Option<&str>,
    city: &str,
) -> Result<Coordinates, AppError> {
    let api_key = api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
        AppError::Config("GOOGLE_MAPS_API_KEY environment variable not set".to_string())
    })?;

    info!("Geocoding city: {}", city);

    let client = reqwest::Client::new();
    let response = client
        .get(endpoint)
        .query(&[("address", city), ("key", api_key)])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        error!("Failed to geocode city: {}", status);
        return Err(AppError::Remote {
            status: status.to_string(),
            body,
        });
    }

    let geocode_response: response::GeocodeResponse = serde_json::from_str(&body)?;
    debug!("Geocode response: {:?}", geocode_response);

    match geocode_response.status.as_deref() {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(other) => {
            error!("Geocoding service refused the request: {}", other);
            return Err(AppError::Remote {
                status: other.to_string(),
                body: geocode_response.error_message.unwrap_or_default(),
            });
        }
    }

    let first = geocode_response
        .results
        .first()
        .ok_or_else(|| AppError::NotFound("city not found".to_string()))?;

    let coordinates = Coordinates {
        latitude: first.geometry.location.lat,
        longitude: first.geometry.location.lng,
    };
    info!(
        "Resolved {} to {}, {}",
        city, coordinates.latitude, coordinates.longitude
    );
    Ok(coordinates)
}
