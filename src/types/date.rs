use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Returns the UTC calendar date of an instant as `YYYY-MM-DD`.
///
/// The date is taken after converting to UTC, so an evening in a western
/// time zone may already be the next day.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rybbit_api::types::to_date_string;
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
/// assert_eq!(to_date_string(&instant), "2024-03-09");
/// ```
#[must_use]
pub fn to_date_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    to_date(instant).format("%Y-%m-%d").to_string()
}

/// Returns the UTC calendar date of an instant.
#[must_use]
pub fn to_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Utc).date_naive()
}
