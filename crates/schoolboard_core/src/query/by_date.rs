//! Calendar-day lookup.

use crate::model::SubstitutionEntry;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Values that identify a calendar day, ignoring time-of-day.
pub trait AsCalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl AsCalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl AsCalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Uses the day in the value's own time zone.
impl<Tz: TimeZone> AsCalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: AsCalendarDay + ?Sized> AsCalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Returns entries whose `date` is the calendar day of `day`, preserving
/// collection order. Days without entries yield an empty list.
pub fn substitutions_on<D: AsCalendarDay>(
    entries: &[SubstitutionEntry],
    day: D,
) -> Vec<&SubstitutionEntry> {
    let day = day.calendar_day();
    entries.iter().filter(|entry| entry.date == day).collect()
}

/// Parses `YYYY-MM-DD`, also accepting a full ISO-8601 timestamp whose first
/// ten characters are the day (`2026-10-16T08:00:00Z`).
pub fn parse_calendar_day(text: &str) -> Option<NaiveDate> {
    let day = text.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_calendar_day, AsCalendarDay};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn parse_accepts_day_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(parse_calendar_day("2026-10-16"), Some(expected));
        assert_eq!(parse_calendar_day(" 2026-10-16T23:59:00Z"), Some(expected));
        assert_eq!(parse_calendar_day("16.10.2026"), None);
        assert_eq!(parse_calendar_day("2026"), None);
    }

    #[test]
    fn datetime_ignores_time_of_day() {
        let late = Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 59).unwrap();
        assert_eq!(
            late.calendar_day(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert_eq!(late.naive_utc().calendar_day(), late.calendar_day());
    }
}
