use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::VifError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_timezone(name: &str) -> Result<Tz, VifError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| VifError::UnknownTimezone(name.to_string()))
}

/// Calendar date of `now` as seen in `tz`.
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

pub fn today_and_tomorrow(tz: Tz, now: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
    let today = today_in(tz, now);
    (today, today + Duration::days(1))
}

/// Local calendar date of an instant that already carries its zone.
pub fn reference_date<Z: TimeZone>(now: &DateTime<Z>) -> NaiveDate {
    now.date_naive()
}

/// Monday of the week containing `date`.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    // Sunday belongs to the week that started six days earlier.
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month.and_then(|first| first.pred_opt())
}

pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}
