use chrono::Duration;

use crate::prayer_times::PrayerTimesResponse;
use crate::schedule::{NextPrayer, Prayer};

const SEPARATOR: &str = "----------------------";

/// Formats a countdown as `HH:MM:SS`, truncating sub-second precision.
/// Hours are not capped at 24.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}

/// Renders the full report printed to stdout.
pub fn render(
    prayer_times: &PrayerTimesResponse,
    prayers: &[Prayer],
    next: &NextPrayer,
    show_hijri: bool,
) -> String {
    let date = &prayer_times.data.date;

    let mut lines = vec![
        "Islamic Prayer Times:".to_string(),
        format!("Date: {}", date.readable),
    ];
    if show_hijri {
        lines.push(format!("Hijri Date: {}", date.hijri.display()));
    }
    lines.push(SEPARATOR.to_string());

    lines.extend(
        prayers
            .iter()
            .map(|prayer| format!("{:<8} \t: {}", prayer.name, prayer.time)),
    );

    lines.push(String::new());
    lines.push(format!(
        "Time Until Next Prayer ({}): {}",
        next.name,
        format_countdown(next.remaining)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
