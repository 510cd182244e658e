//! Calendar date ranges.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

/// Every date of one calendar year, from January 1st to December 31st.
///
/// Yields 366 dates in a leap year and 365 otherwise. The value is `Clone`, so a fresh pass can
/// be started from any saved copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarYear {
    year: i32,
    front: NaiveDate,
    back: NaiveDate,
    remaining: usize,
}

impl CalendarYear {
    /// Returns `None` if `year` is outside the range chrono can represent.
    pub fn new(year: i32) -> Option<Self> {
        let front = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let back = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self {
            year,
            front,
            back,
            remaining: back.ordinal() as usize,
        })
    }

    /// The calendar year being iterated.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether the year has a February 29th.
    pub fn is_leap_year(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, 2, 29).is_some()
    }
}

impl Iterator for CalendarYear {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(next) = self.front.succ_opt() {
                self.front = next;
            }
        }
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for CalendarYear {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(prev) = self.back.pred_opt() {
                self.back = prev;
            }
        }
        Some(date)
    }
}

impl ExactSizeIterator for CalendarYear {}

impl FusedIterator for CalendarYear {}

/// Generate the consecutive dates of `year`, starting at `<year>-01-01`.
pub fn generate_calendar_year(year: i32) -> Option<CalendarYear> {
    CalendarYear::new(year)
}

#[cfg(test)]
mod tests {
    use super::generate_calendar_year;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_year_has_366_dates() {
        let dates: Vec<NaiveDate> = generate_calendar_year(2020).unwrap().collect();
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[0], ymd(2020, 1, 1));
        assert_eq!(dates[59], ymd(2020, 2, 29));
        assert_eq!(dates[dates.len() - 1], ymd(2020, 12, 31));
    }

    #[test]
    fn common_year_has_365_dates() {
        let cal = generate_calendar_year(2021).unwrap();
        assert!(!cal.is_leap_year());
        assert_eq!(cal.len(), 365);
        assert_eq!(cal.last(), Some(ymd(2021, 12, 31)));
    }

    #[test]
    fn century_rules_apply() {
        assert_eq!(generate_calendar_year(1900).unwrap().count(), 365);
        assert_eq!(generate_calendar_year(2000).unwrap().count(), 366);
    }

    #[test]
    fn dates_are_consecutive() {
        let dates: Vec<NaiveDate> = generate_calendar_year(2023).unwrap().collect();
        assert!(dates.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
    }

    #[test]
    fn clone_restarts_and_back_iteration_meets_front() {
        let cal = generate_calendar_year(2024).unwrap();
        let mut it = cal.clone();
        assert_eq!(it.next(), Some(ymd(2024, 1, 1)));
        assert_eq!(it.next_back(), Some(ymd(2024, 12, 31)));
        assert_eq!(it.len(), 364);
        assert_eq!(it.count(), 364);

        assert_eq!(cal.year(), 2024);
        assert_eq!(cal.count(), 366);
    }

    #[test]
    fn single_remaining_date_is_yielded_once() {
        let mut it = generate_calendar_year(2021).unwrap();
        for _ in 0..364 {
            it.next();
        }
        assert_eq!(it.next_back(), Some(ymd(2021, 12, 31)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn out_of_range_year_is_none() {
        assert!(generate_calendar_year(i32::MAX).is_none());
    }
}
