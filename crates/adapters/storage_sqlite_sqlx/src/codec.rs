//! Text encodings shared by the repositories.
//!
//! Timestamps are RFC 3339 UTC with a fixed microsecond precision so that
//! `ORDER BY created_at` sorts chronologically. Dates are `YYYY-MM-DD`.

use std::error::Error;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rntly_domain::time::Timestamp;

pub(crate) fn encode_timestamp(value: &Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Parse a column stored in its `Display` form (enums, dates).
pub(crate) fn decode<T>(raw: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    T::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
