/// Response structure for the Google Maps geocoding API
#[derive(serde::Deserialize, Debug)]
pub struct GeocodeResponse {
    /// Matches for the requested address, best match first
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Upstream status, e.g. "OK", "ZERO_RESULTS" or "REQUEST_DENIED"
    #[serde(default)]
    pub status: Option<String>,
    /// Explanation sent along with a failed status
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(serde::Deserialize, Debug)]
pub struct Geometry {
    pub location: LatLng,
}

/// Geographic position in decimal degrees
#[derive(serde::Deserialize, Debug)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
