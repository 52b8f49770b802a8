// Both operations place each `HH:MM` entry on today's date in the timezone
// of `now`. Only `next_prayer` wraps a passed prayer around to tomorrow.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, LocalResult, NaiveTime, Offset, TimeZone};

use crate::error::AppError;

/// One row of the printed schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prayer {
    pub name: String,
    pub time: String,
}

/// The soonest upcoming prayer and how long until it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: String,
    pub remaining: Duration,
}

/// Parses a 24-hour `HH:MM` time of day.
pub fn parse_time_of_day(time: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| AppError::Parse(time.to_string()))
}

/// Places `time` on the calendar day of `now`, in `now`'s timezone.
///
/// Ambiguous local times (clocks going back) resolve to the earlier
/// instant. Times skipped by a forward transition keep the offset from
/// before the transition, so "02:30" in a 02:00-03:00 gap becomes 03:30.
pub fn today_at<Tz: TimeZone>(now: &DateTime<Tz>, time: NaiveTime) -> DateTime<Tz> {
    let naive = now.date_naive().and_time(time);
    let tz = now.timezone();
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=24)
            .map(Duration::hours)
            .find_map(|back| {
                tz.from_local_datetime(&(naive - back))
                    .earliest()
                    .map(|before| before + back)
            })
            .unwrap_or_else(|| {
                let offset = now.offset().fix().local_minus_utc();
                tz.from_utc_datetime(&(naive - Duration::seconds(offset.into())))
            }),
    }
}

/// Finds the prayer that comes next after `now`, wrapping to tomorrow for
/// prayers that have already passed today.
///
/// On equal remaining time the lexically first name wins. An empty table is
/// an error rather than an empty answer.
pub fn next_prayer<Tz: TimeZone>(
    timings: &BTreeMap<String, String>,
    now: &DateTime<Tz>,
) -> Result<NextPrayer, AppError> {
    let mut next: Option<NextPrayer> = None;

    for (name, time) in timings {
        let mut at = today_at(now, parse_time_of_day(time)?);
        if at < *now {
            at = at + Duration::hours(24);
        }
        let remaining = at.signed_duration_since(now);

        match &next {
            Some(current) if current.remaining <= remaining => {}
            _ => {
                next = Some(NextPrayer {
                    name: name.clone(),
                    remaining,
                })
            }
        }
    }

    next.ok_or(AppError::EmptySchedule)
}

/// Orders the table by today's clock time, earliest first.
pub fn chronological<Tz: TimeZone>(
    timings: &BTreeMap<String, String>,
    now: &DateTime<Tz>,
) -> Result<Vec<Prayer>, AppError> {
    let mut prayers = timings
        .iter()
        .map(|(name, time)| {
            let at = today_at(now, parse_time_of_day(time)?);
            Ok((
                at,
                Prayer {
                    name: name.clone(),
                    time: time.clone(),
                },
            ))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    prayers.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(prayers.into_iter().map(|(_, prayer)| prayer).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use chrono_tz::Europe::Berlin;

    fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, time)| (name.to_string(), time.to_string()))
            .collect()
    }

    fn sample() -> BTreeMap<String, String> {
        table(&[("Fajr", "05:00"), ("Dhuhr", "12:00"), ("Asr", "15:30")])
    }

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 19, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn next_prayer_later_today() {
        let next = next_prayer(&sample(), &at(13, 0)).unwrap();
        assert_eq!(next.name, "Asr");
        assert_eq!(next.remaining, Duration::minutes(150));
    }

    #[test]
    fn next_prayer_wraps_to_tomorrow() {
        let next = next_prayer(&sample(), &at(16, 0)).unwrap();
        assert_eq!(next.name, "Fajr");
        assert_eq!(next.remaining, Duration::hours(13));
    }

    #[test]
    fn prayer_starting_now_is_next() {
        let next = next_prayer(&sample(), &at(12, 0)).unwrap();
        assert_eq!(next.name, "Dhuhr");
        assert_eq!(next.remaining, Duration::zero());
    }

    #[test]
    fn seconds_past_the_minute_count_down() {
        let now = at(13, 0) + Duration::seconds(15);
        let next = next_prayer(&sample(), &now).unwrap();
        assert_eq!(next.name, "Asr");
        assert_eq!(next.remaining, Duration::minutes(150) - Duration::seconds(15));
    }

    #[test]
    fn ties_go_to_first_name() {
        let timings = table(&[("Sunset", "17:52"), ("Maghrib", "17:52"), ("Isha", "19:07")]);
        let next = next_prayer(&timings, &at(17, 0)).unwrap();
        assert_eq!(next.name, "Maghrib");
    }

    #[test]
    fn empty_table_fails() {
        let err = next_prayer(&BTreeMap::new(), &at(13, 0)).unwrap_err();
        assert!(matches!(err, AppError::EmptySchedule));
    }

    #[test]
    fn bad_time_aborts_calculation() {
        let mut timings = sample();
        timings.insert("Isha".to_string(), "7pm".to_string());

        let err = next_prayer(&timings, &at(13, 0)).unwrap_err();
        assert!(matches!(err, AppError::Parse(ref time) if time == "7pm"));

        let err = chronological(&timings, &at(13, 0)).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn out_of_range_time_is_rejected() {
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn today_at_reproduces_original_string() {
        let now = at(9, 41);
        for time in ["00:00", "05:12", "12:10", "15:31", "23:59"] {
            let rebuilt = today_at(&now, parse_time_of_day(time).unwrap());
            assert_eq!(rebuilt.format("%H:%M").to_string(), time);
            assert_eq!(rebuilt.date_naive(), now.date_naive());
        }
    }

    #[test]
    fn chronological_orders_by_clock_time() {
        let timings = table(&[
            ("Isha", "19:07"),
            ("Fajr", "05:12"),
            ("Maghrib", "17:52"),
            ("Dhuhr", "12:10"),
            ("Sunrise", "06:28"),
            ("Asr", "15:31"),
        ]);

        let names: Vec<_> = chronological(&timings, &at(0, 1))
            .unwrap()
            .into_iter()
            .map(|prayer| prayer.name)
            .collect();

        assert_eq!(names, ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }

    #[test]
    fn chronological_does_not_wrap_passed_prayers() {
        // After Asr, Fajr is next but still listed first.
        let now = at(16, 0);
        let order = chronological(&sample(), &now).unwrap();

        assert_eq!(order[0].name, "Fajr");
        assert_eq!(next_prayer(&sample(), &now).unwrap().name, "Fajr");
        assert_eq!(order.last().unwrap().name, "Asr");
    }

    #[test]
    fn chronological_is_non_decreasing() {
        let timings = table(&[
            ("A", "23:00"),
            ("B", "00:30"),
            ("C", "12:00"),
            ("D", "12:00"),
            ("E", "06:45"),
        ]);

        let order = chronological(&timings, &at(0, 0)).unwrap();
        let times: Vec<_> = order
            .iter()
            .map(|prayer| parse_time_of_day(&prayer.time).unwrap())
            .collect();

        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(order[2].name, "C");
        assert_eq!(order[3].name, "D");
    }

    #[test]
    fn gap_time_lands_after_spring_forward() {
        // Berlin skips 02:00-03:00 on 2026-03-29.
        let now = Berlin.with_ymd_and_hms(2026, 3, 29, 12, 0, 0).unwrap();

        let rebuilt = today_at(&now, parse_time_of_day("02:30").unwrap());
        assert_eq!(rebuilt.format("%H:%M").to_string(), "03:30");
        assert_eq!(
            rebuilt.naive_utc(),
            NaiveDate::from_ymd_opt(2026, 3, 29)
                .unwrap()
                .and_hms_opt(1, 30, 0)
                .unwrap()
        );

        let timings = table(&[("Late", "02:30"), ("Early", "01:45")]);
        let names: Vec<_> = chronological(&timings, &now)
            .unwrap()
            .into_iter()
            .map(|prayer| prayer.name)
            .collect();
        assert_eq!(names, ["Early", "Late"]);
    }

    #[test]
    fn gap_time_counts_down_to_real_instant() {
        let now = Berlin.with_ymd_and_hms(2026, 3, 29, 1, 0, 0).unwrap();
        let timings = table(&[("Fajr", "02:30"), ("Dhuhr", "13:20")]);

        let next = next_prayer(&timings, &now).unwrap();
        assert_eq!(next.name, "Fajr");
        assert_eq!(next.remaining, Duration::minutes(90));
    }

    #[test]
    fn repeated_time_takes_first_occurrence() {
        // Berlin repeats 02:00-03:00 on 2026-10-25.
        let now = Berlin.with_ymd_and_hms(2026, 10, 25, 12, 0, 0).unwrap();

        let rebuilt = today_at(&now, parse_time_of_day("02:30").unwrap());
        assert_eq!(rebuilt.format("%H:%M").to_string(), "02:30");
        assert_eq!(
            rebuilt.naive_utc(),
            NaiveDate::from_ymd_opt(2026, 10, 25)
                .unwrap()
                .and_hms_opt(0, 30, 0)
                .unwrap()
        );
    }
}
