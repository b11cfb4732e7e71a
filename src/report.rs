use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::{error::AppError, location::Location, sun_times::response::SunTimes};

/// Shown in place of a timestamp that cannot be parsed
pub const INVALID_TIME: &str = "Invalid time";

/// Resolves an IANA timezone identifier such as "Europe/Tallinn".
pub fn resolve_time_zone(id: &str) -> Result<Tz, AppError> {
    id.parse::<Tz>().map_err(|e| AppError::TimeZone(e.to_string()))
}

/// Converts an RFC-3339 timestamp to `tz` and renders it as 24-hour `HH:MM`.
pub fn local_time(utc: &str, tz: Tz) -> Result<String, chrono::ParseError> {
    let parsed = DateTime::parse_from_rfc3339(utc)?;
    Ok(parsed.with_timezone(&tz).format("%H:%M").to_string())
}

/// Like [`local_time`], but falls back to [`INVALID_TIME`] when the timestamp does not parse.
pub fn format_time(utc: &str, tz: Tz) -> String {
    local_time(utc, tz).unwrap_or_else(|_| INVALID_TIME.to_string())
}

/// Sun events in display order
fn events(sun_times: &SunTimes) -> [(&'static str, &str); 9] {
    [
        ("Sunrise", sun_times.sunrise.as_str()),
        ("Sunset", sun_times.sunset.as_str()),
        ("Solar Noon", sun_times.solar_noon.as_str()),
        ("Civil Twilight Begin", sun_times.civil_twilight_begin.as_str()),
        ("Civil Twilight End", sun_times.civil_twilight_end.as_str()),
        ("Nautical Twilight Begin", sun_times.nautical_twilight_begin.as_str()),
        ("Nautical Twilight End", sun_times.nautical_twilight_end.as_str()),
        ("Astronomical Twilight Begin", sun_times.astronomical_twilight_begin.as_str()),
        ("Astronomical Twilight End", sun_times.astronomical_twilight_end.as_str()),
    ]
}

/// Local sun times for one location, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    location: String,
    lines: Vec<(&'static str, String)>,
}

impl Report {
    /// Converts every event of `sun_times` into the timezone of `location`.
    ///
    /// Fails only if the timezone cannot be resolved; unparseable timestamps
    /// become [`INVALID_TIME`].
    pub fn new(location: &Location, sun_times: &SunTimes) -> Result<Self, AppError> {
        let tz = resolve_time_zone(location.time_zone)?;

        let lines = events(sun_times)
            .into_iter()
            .map(|(label, utc)| (label, format_time(utc, tz)))
            .collect();

        Ok(Self {
            location: location.name.to_string(),
            lines,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Location: {}", self.location)?;
        for (label, value) in &self.lines {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{location::TARTU, sun_times};

    const OK_BODY: &str = r#"{
        "results": {
            "sunrise": "2024-06-21T00:59:41+00:00",
            "sunset": "2024-06-21T19:53:12+00:00",
            "solar_noon": "2024-06-21T10:26:27+00:00",
            "day_length": 68011,
            "civil_twilight_begin": "2024-06-20T23:25:00+00:00",
            "civil_twilight_end": "2024-06-21T21:27:53+00:00",
            "nautical_twilight_begin": "2024-06-21T02:14:00+00:00",
            "nautical_twilight_end": "2024-06-21T18:40:00+00:00",
            "astronomical_twilight_begin": "2024-06-21T01:05:00+00:00",
            "astronomical_twilight_end": "2024-06-21T17:30:00+00:00"
        },
        "status": "OK"
    }"#;

    fn tallinn() -> Tz {
        resolve_time_zone("Europe/Tallinn").unwrap()
    }

    #[test]
    fn summer_time_in_tallinn() {
        assert_eq!(format_time("2024-06-21T02:14:00+00:00", tallinn()), "05:14");
    }

    #[test]
    fn winter_time_in_tallinn() {
        assert_eq!(format_time("2024-12-21T07:05:00+00:00", tallinn()), "09:05");
    }

    #[test]
    fn previous_day_utc_is_shown_without_date() {
        assert_eq!(format_time("2024-06-20T23:25:00+00:00", tallinn()), "02:25");
    }

    #[test]
    fn unparseable_timestamps_fall_back() {
        assert_eq!(format_time("", tallinn()), INVALID_TIME);
        assert_eq!(format_time("not a time", tallinn()), INVALID_TIME);
        assert_eq!(format_time("2024-06-21 02:14", tallinn()), INVALID_TIME);
        assert!(local_time("", tallinn()).is_err());
    }

    #[test]
    fn unknown_time_zone() {
        let err = resolve_time_zone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, AppError::TimeZone(_)));
        assert!(err.to_string().starts_with("Error loading location: "));
    }

    #[test]
    fn report_has_ten_lines_in_order() {
        let sun_times = sun_times::decode(OK_BODY.as_bytes()).unwrap();
        let report = Report::new(&TARTU, &sun_times).unwrap();

        let expected = "\
Location: Tartu, Estonia
Sunrise: 03:59
Sunset: 22:53
Solar Noon: 13:26
Civil Twilight Begin: 02:25
Civil Twilight End: 00:27
Nautical Twilight Begin: 05:14
Nautical Twilight End: 21:40
Astronomical Twilight Begin: 04:05
Astronomical Twilight End: 20:30
";
        assert_eq!(report.to_string(), expected);
        assert_eq!(report.to_string().lines().count(), 10);
    }

    #[test]
    fn invalid_field_does_not_abort_report() {
        let sun_times = SunTimes {
            sunrise: "garbage".to_string(),
            sunset: "2024-06-21T19:53:12+00:00".to_string(),
            ..SunTimes::default()
        };
        let report = Report::new(&TARTU, &sun_times).unwrap().to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "Sunrise: Invalid time");
        assert_eq!(lines[2], "Sunset: 22:53");
        assert_eq!(lines[3], "Solar Noon: Invalid time");
    }

    #[test]
    fn unknown_time_zone_stops_report() {
        let location = Location {
            time_zone: "Nowhere/Atlantis",
            ..TARTU
        };
        let result = Report::new(&location, &SunTimes::default());
        assert!(matches!(result, Err(AppError::TimeZone(_))));
    }

    #[test]
    fn same_body_gives_same_report() {
        let first = Report::new(&TARTU, &sun_times::decode(OK_BODY.as_bytes()).unwrap()).unwrap();
        let second = Report::new(&TARTU, &sun_times::decode(OK_BODY.as_bytes()).unwrap()).unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }
}
