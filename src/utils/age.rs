use chrono::{Datelike, NaiveDate};

/// Whole years elapsed from `dob` to `on`. Never negative.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(1990, 1, 1), date(2025, 1, 1)), 35);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_on(date(1980, 5, 15), date(2025, 5, 14)), 44);
        assert_eq!(age_on(date(1980, 5, 15), date(2025, 5, 15)), 45);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(age_on(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(age_on(date(2000, 2, 29), date(2025, 3, 1)), 25);
    }

    #[test]
    fn test_future_dob_clamps_to_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2025, 1, 1)), 0);
    }
}
