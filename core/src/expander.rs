use chrono::{Duration, NaiveDate};

use crate::model::pattern::RecurrencePattern;
use crate::time::{month_end, week_anchor};

/// Concrete dates a pattern denotes relative to `today`.
///
/// Daily yields Monday..Sunday of the current week. Weekly yields one date
/// per ordinal in the pattern's own order. Monthly yields the last day of
/// the current month.
pub fn expand(pattern: &RecurrencePattern, today: NaiveDate) -> Vec<NaiveDate> {
    let anchor = week_anchor(today);
    match pattern {
        RecurrencePattern::Daily { .. } => (0..7).map(|offset| anchor + Duration::days(offset)).collect(),
        RecurrencePattern::Weekly { days, .. } => days
            .iter()
            .map(|ordinal| anchor + Duration::days(i64::from(*ordinal)))
            .collect(),
        RecurrencePattern::Monthly { .. } => month_end(today).into_iter().collect(),
    }
}
