//! Numeric aggregations over [`Person`] records.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{RecordError, RecordResult};
use crate::types::Person;

/// Current local date. Only the `*_today` convenience wrappers read the clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar years from `from` to `to`, negative if `to` is earlier.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    if to < from {
        return -whole_years_between(to, from);
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Age in whole years of `person` on `as_of`.
///
/// Fails with [`RecordError::MissingBirthDate`] if the birth date is unknown.
pub fn compute_age(person: &Person, as_of: NaiveDate) -> RecordResult<i32> {
    let dob = person.date_of_birth.ok_or(RecordError::MissingBirthDate {
        person_id: person.person_id,
    })?;
    Ok(whole_years_between(dob, as_of))
}

/// Mean age on `as_of` of everyone with a known birth date.
///
/// Returns `None` if nobody has a known birth date.
pub fn average_age(people: &[Person], as_of: NaiveDate) -> Option<f64> {
    let (sum, count) = people
        .iter()
        .filter_map(|p| p.date_of_birth)
        .fold((0i64, 0usize), |(sum, count), dob| {
            (sum + i64::from(whole_years_between(dob, as_of)), count + 1)
        });
    (count > 0).then(|| sum as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::sample_people;
    use crate::types::Gender;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn whole_years_counts_completed_birthdays() {
        assert_eq!(whole_years_between(ymd(1968, 1, 25), ymd(2019, 12, 20)), 51);
        assert_eq!(whole_years_between(ymd(1999, 12, 31), ymd(2019, 12, 20)), 19);
        assert_eq!(whole_years_between(ymd(2000, 12, 20), ymd(2019, 12, 20)), 19);
        assert_eq!(whole_years_between(ymd(2019, 12, 20), ymd(2019, 12, 20)), 0);
    }

    #[test]
    fn leap_day_birthday_completes_on_march_first() {
        let dob = ymd(1960, 2, 29);
        assert_eq!(whole_years_between(dob, ymd(2019, 2, 28)), 58);
        assert_eq!(whole_years_between(dob, ymd(2019, 3, 1)), 59);
    }

    #[test]
    fn future_reference_date_is_negative() {
        assert_eq!(whole_years_between(ymd(2020, 6, 1), ymd(2019, 1, 1)), -1);
    }

    #[test]
    fn compute_age_rejects_unknown_birth_date() {
        let p = Person::new(6, "Maja", "andersson", None, Gender::Female);
        let err = compute_age(&p, ymd(2019, 12, 20)).unwrap_err();
        assert!(matches!(err, RecordError::MissingBirthDate { person_id: 6 }));
    }

    #[test]
    fn average_age_skips_unknown_birth_dates() {
        let people = sample_people();
        // 51 + 7 + 34 + 44 + 100 + 34 over 6 dated people.
        let avg = average_age(&people, ymd(2019, 12, 20)).unwrap();
        assert!((avg - 270.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn average_age_of_nobody_is_none() {
        assert_eq!(average_age(&[], ymd(2019, 12, 20)), None);
        let undated = vec![Person::new(1, "A", "B", None, Gender::Other)];
        assert_eq!(average_age(&undated, ymd(2019, 12, 20)), None);
    }

    #[test]
    fn today_is_after_fixture_dates() {
        assert!(today() > ymd(2020, 1, 1));
    }
}
