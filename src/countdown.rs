use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

mod ticker;

pub use ticker::{Cadence, LiveCountdown};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const OFFSET_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M%#z",
];

const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub total_ms: i64,
}

impl RemainingTime {
    pub const ZERO: RemainingTime = RemainingTime {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_ms: 0,
    };

    pub fn from_total_ms(total_ms: i64) -> Self {
        let magnitude = total_ms.unsigned_abs();
        RemainingTime {
            days: magnitude / MS_PER_DAY as u64,
            hours: ((magnitude / MS_PER_HOUR as u64) % 24) as u8,
            minutes: ((magnitude / MS_PER_MINUTE as u64) % 60) as u8,
            seconds: ((magnitude / MS_PER_SECOND as u64) % 60) as u8,
            total_ms,
        }
    }

    pub fn is_running(&self) -> bool {
        self.total_ms > 0
    }

    pub fn is_expired(&self) -> bool {
        self.total_ms < 0
    }
}

pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let zoned = match raw.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    // Date-only deadlines are UTC midnight, the way browsers read them.
    // `YYYY-MM` and `YYYY` mean the first day of that month or year.
    let padded = match raw.len() {
        4 => format!("{}-01-01", raw),
        7 => format!("{}-01", raw),
        _ => raw.to_string(),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn compute_remaining(deadline: Option<&str>, now: DateTime<Utc>) -> RemainingTime {
    match deadline.and_then(parse_deadline) {
        Some(instant) => RemainingTime::from_total_ms((instant - now).num_milliseconds()),
        None => RemainingTime::ZERO,
    }
}

pub fn days_left(deadline: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let instant = deadline.and_then(parse_deadline)?;
    let total = (instant - now).num_milliseconds();
    Some(-(-total).div_euclid(MS_PER_DAY))
}

pub fn format_deadline(deadline: Option<&str>) -> Option<String> {
    deadline
        .and_then(parse_deadline)
        .map(|instant| instant.with_timezone(&Local).format("%B %-d, %Y").to_string())
}

pub fn format_countdown(remaining: &RemainingTime) -> String {
    let sign = if remaining.is_expired() { "-" } else { "" };
    format!(
        "{}{}d {:02}:{:02}:{:02}",
        sign, remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    )
}
