use chrono::{DateTime, Local, SecondsFormat, Utc};

/// e.g. `2024-05-01T09:30:00.000Z`
pub fn iso_timestamp() -> String {
    to_iso(Utc::now())
}

pub fn to_iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human readable local time stamped on the owner notification,
/// e.g. `5/1/2024, 9:30:00 AM`.
pub fn received_at() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
