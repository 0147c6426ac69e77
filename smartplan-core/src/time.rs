//! Time utilities: "HH:MM" wall-clock values and timezone-aware dates.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Parse a wall-clock time like "09:30".
pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| anyhow::anyhow!("invalid time of day '{s}': {e}"))
}

pub fn format_hhmm(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Minutes since midnight.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Inverse of [`minute_of_day`]; `None` past 23:59.
pub fn from_minute_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Place a time of day on the calendar date of `date`, keeping its offset.
pub fn on_date(date: &DateTime<FixedOffset>, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    let naive = date.date_naive().and_time(time);
    date.offset().from_local_datetime(&naive).single()
}

fn parse_tz(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// Express a UTC instant in an IANA zone like "Europe/Moscow".
pub fn in_timezone(instant: DateTime<Utc>, tz: &str) -> Result<DateTime<FixedOffset>> {
    let tz = parse_tz(tz)?;
    Ok(instant.with_timezone(&tz).fixed_offset())
}

pub fn now_in_timezone(tz: &str) -> Result<DateTime<FixedOffset>> {
    in_timezone(Utc::now(), tz)
}

/// Midday of a calendar date in an IANA zone. Midday keeps clear of DST gaps.
pub fn local_date_in_timezone(date: NaiveDate, tz: &str) -> Result<DateTime<FixedOffset>> {
    let tz = parse_tz(tz)?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid date: {date}"))?;
    let local = tz
        .from_local_datetime(&noon)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("no local midday for {date} in {tz}"))?;
    Ok(local.fixed_offset())
}

/// Serde adapter storing a `NaiveTime` as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_hhmm(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(d)?;
        super::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}
