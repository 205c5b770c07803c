use chrono::{Datelike, NaiveDate, Weekday};

use crate::services::index::HolidayIndex;

/// True for Saturday and Sunday.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count working days from `start` to `end` inclusive.
///
/// A day counts iff it is neither a weekend day nor a date present in
/// `index`. A reversed range (`end < start`) spans no days and yields 0
/// rather than a negative count.
///
/// Pure function shared by both catalog variants; safe to call concurrently
/// as long as the index is not mutated underneath it.
pub fn count_working_days_between(start: NaiveDate, end: NaiveDate, index: &HolidayIndex) -> i64 {
    let span = (end - start).num_days() + 1;
    if span <= 0 {
        return 0;
    }

    start
        .iter_days()
        .take(span as usize)
        .filter(|day| !is_weekend(*day) && !index.contains(*day))
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_alone_counts_zero() {
        let index = HolidayIndex::new();
        for d in [date(2000, 1, 1), date(2022, 7, 16), date(2022, 7, 23)] {
            assert_eq!(d.weekday(), Weekday::Sat);
            assert_eq!(count_working_days_between(d, d, &index), 0);
        }
    }

    #[test]
    fn sunday_alone_counts_zero() {
        let index = HolidayIndex::new();
        for d in [date(2000, 1, 2), date(2022, 7, 17), date(2022, 7, 24)] {
            assert_eq!(d.weekday(), Weekday::Sun);
            assert_eq!(count_working_days_between(d, d, &index), 0);
        }
    }

    #[test]
    fn plain_week_counts_five() {
        let index = HolidayIndex::new();
        // Monday through Sunday.
        assert_eq!(
            count_working_days_between(date(2022, 6, 27), date(2022, 7, 3), &index),
            5
        );
    }

    #[test]
    fn holiday_inside_range_is_excluded() {
        for (start, end, holiday) in [
            (date(2022, 6, 27), date(2022, 7, 4), date(2022, 7, 1)),
            (date(2022, 7, 29), date(2022, 8, 5), date(2022, 8, 2)),
        ] {
            let mut index = HolidayIndex::new();
            index.add(Holiday::for_date(holiday));
            assert_eq!(count_working_days_between(start, end, &index), 5);
        }
    }

    #[test]
    fn holiday_on_a_weekend_is_not_counted_twice() {
        let mut index = HolidayIndex::new();
        index.add(Holiday::for_date(date(2022, 7, 16))); // a Saturday
        assert_eq!(
            count_working_days_between(date(2022, 7, 11), date(2022, 7, 17), &index),
            5
        );
    }

    #[test]
    fn reversed_range_counts_zero() {
        let index = HolidayIndex::new();
        assert_eq!(
            count_working_days_between(date(2022, 7, 4), date(2022, 6, 27), &index),
            0
        );
    }

    #[test]
    fn marked_weekday_counts_zero_over_itself() {
        let mut index = HolidayIndex::new();
        let d = date(2000, 1, 4); // a Tuesday
        index.add(Holiday::for_date(d));
        assert_eq!(count_working_days_between(d, d, &index), 0);
    }
}
