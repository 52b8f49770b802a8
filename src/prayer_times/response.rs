use std::collections::BTreeMap;

/// Response structure for the Aladhan `/v1/timings` endpoint
#[derive(serde::Deserialize, Debug)]
pub struct PrayerTimesResponse {
    /// Status code reported inside the body, 200 on success
    pub code: i64,
    pub data: PrayerTimesData,
}

#[derive(serde::Deserialize, Debug)]
pub struct PrayerTimesData {
    /// Prayer name to time of day in 24-hour "HH:MM" format
    pub timings: BTreeMap<String, String>,
    pub date: DateInfo,
}

/// Date the timings were computed for
#[derive(serde::Deserialize, Debug)]
pub struct DateInfo {
    /// Gregorian date, e.g. "19 Oct 2026"
    pub readable: String,
    #[serde(default)]
    pub hijri: HijriDate,
}

#[derive(serde::Deserialize, Debug, Default)]
pub struct HijriDate {
    /// Absent from some responses
    #[serde(default)]
    pub readable: String,
    /// Numeric form, "DD-MM-YYYY"
    #[serde(default)]
    pub date: String,
}

impl HijriDate {
    /// Readable form when the API sends one, numeric form otherwise.
    pub fn display(&self) -> &str {
        if self.readable.is_empty() {
            &self.date
        } else {
            &self.readable
        }
    }
}
