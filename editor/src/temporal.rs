use crate::errors::*;
use chrono::prelude::*;
use snafu::ResultExt;

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Combines a calendar date with an `HH:MM` wall-clock time into the instant
/// whose UTC calendar fields equal those values exactly. Editing the same
/// draft from different locales therefore never shifts the stored instants.
/// Seconds and sub-second fields are zeroed.
pub fn combine(date: NaiveDate, time_of_day: &str) -> Result<DateTime<Utc>, DraftError> {
    let time = NaiveTime::parse_from_str(time_of_day, TIME_OF_DAY_FORMAT).context(
        InvalidTimeOfDay {
            value: time_of_day.to_string(),
        },
    )?;
    Ok(DateTime::from_utc(NaiveDateTime::new(date, time), Utc))
}

/// Renders the instant's UTC wall clock as zero-padded `HH:MM`, the inverse
/// of `combine` up to minute precision.
pub fn extract_time_of_day(instant: DateTime<Utc>) -> String {
    instant.format(TIME_OF_DAY_FORMAT).to_string()
}

/// Calendar widgets hand back an instant at some locale-dependent moment of
/// the selected day; collapsing to the UTC calendar day keeps the selection
/// from drifting across a midnight boundary.
pub fn normalize_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date().naive_utc()
}
