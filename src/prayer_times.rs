use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::geocode::Coordinates;

mod response;

pub use response::PrayerTimesResponse;

pub const PRAYER_TIMES_ENDPOINT: &str = "https://api.aladhan.com";

/// Builds the timings URL, e.g.
/// `https://api.aladhan.com/v1/timings/19-10-2026?latitude=...&longitude=...&method=19`.
fn timings_url(endpoint: &str, coordinates: Coordinates, method: i32, date: NaiveDate) -> String {
    format!(
        "{}/v1/timings/{}?latitude={:.6}&longitude={:.6}&method={}",
        endpoint.trim_end_matches('/'),
        date.format("%d-%m-%Y"),
        coordinates.latitude,
        coordinates.longitude,
        method
    )
}

/// Fetches the prayer timetable for `date` at `coordinates`.
///
/// `method` selects the calculation convention used by the API.
pub async fn get_prayer_times(
    endpoint: &str,
    coordinates: Coordinates,
    method: i32,
    date: NaiveDate,
) -> Result<PrayerTimesResponse, AppError> {
    let url = timings_url(endpoint, coordinates, method, date);
    info!("Fetching prayer times: {}", url);

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        error!("Failed to fetch prayer times: {}", status);
        return Err(AppError::Remote {
            status: status.to_string(),
            body,
        });
    }

    let prayer_times: PrayerTimesResponse = serde_json::from_str(&body)?;
    if prayer_times.code != 200 {
        error!("Prayer times API returned code {}", prayer_times.code);
        return Err(AppError::RemoteCode(prayer_times.code));
    }

    debug!("Prayer times fetched successfully: {:?}", prayer_times);
    Ok(prayer_times)
}
