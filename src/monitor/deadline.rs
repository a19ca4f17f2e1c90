use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Formats accepted in addition to RFC 3339, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid deadline format: '{0}'. Expected ISO 8601, e.g. 2024-03-15T18:00:00Z.")]
pub struct DeadlineError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineComparison {
    /// Inclusive: an event exactly at the deadline is on time.
    pub is_before: bool,
    /// `deadline - event`, negative when late.
    pub delta: Duration,
    pub human_delta: String,
}

pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>, DeadlineError> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| DeadlineError(input.into()))
}

pub fn compare(event_time: DateTime<Utc>, deadline: DateTime<Utc>) -> DeadlineComparison {
    let delta = deadline - event_time;
    let is_before = delta >= Duration::zero();
    let magnitude = if is_before { delta } else { -delta };
    let suffix = if is_before {
        "before deadline"
    } else {
        "after deadline"
    };

    DeadlineComparison {
        is_before,
        delta,
        human_delta: format!("{} {suffix}", format_duration(magnitude)),
    }
}

/// Largest whole unit first: days and hours, else hours and minutes, else minutes.
pub fn format_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    if days > 0 {
        format!("{days} days {hours} hours")
    } else if hours > 0 {
        format!("{hours} hours {minutes} minutes")
    } else {
        format!("{minutes} minutes")
    }
}
