//! Time and date helpers.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// UTC timestamp used for `created_at` / `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Calendar date used for lease boundaries, serialized as `YYYY-MM-DD`.
pub type Date = NaiveDate;

/// Return the current UTC time, truncated to microseconds.
///
/// Storage keeps microsecond precision; truncating here means a record
/// compares equal before and after a round trip.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Return the current UTC calendar date.
#[must_use]
pub fn today() -> Date {
    Utc::now().date_naive()
}
