use core::fmt;

use chrono::{Datelike, NaiveDate};

use super::{BoundaryHook, clamp};

/// Coarsest field touched by a single [`CalendarDate::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateCarry {
    Day,
    Month,
    /// December wrapped to January and the year-end hook (if any) ran.
    Year,
}

/// Leap years under the four-year rule.
///
/// Century years are not exempted, so 1900 and 2100 count as leap years.
/// The clock keeps this rule rather than the Gregorian one.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Number of days in `month` of `year`. Any month outside 1..=12 gets 31.
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Year/month/day counter with a year-end hook.
pub struct CalendarDate<T = ()> {
    year: i32,
    month: u8,
    day: u8,
    on_year_end: Option<BoundaryHook<T>>,
}

impl CalendarDate {
    /// Builds a date from raw values.
    ///
    /// Month is clamped into 1..=12, then day into the clamped month's
    /// length for `year`. Year is kept as given.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        let month = clamp(month, 1, 12) as u8;
        let day = clamp(day, 1, days_in_month(month, year) as i32) as u8;
        Self {
            year,
            month,
            day,
            on_year_end: None,
        }
    }
}

impl<T> CalendarDate<T> {
    /// Installs `hook` as the year-end subscriber, replacing any previous one.
    pub fn bind<U>(self, hook: BoundaryHook<U>) -> CalendarDate<U> {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
            on_year_end: Some(hook),
        }
    }

    pub fn unbind(&mut self) {
        self.on_year_end = None;
    }

    pub fn is_bound(&self) -> bool {
        self.on_year_end.is_some()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub fn days_in_current_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// Moves forward one day, cascading into month and year.
    ///
    /// When December rolls over the year-end hook runs synchronously with
    /// `target` before this returns.
    pub fn advance(&mut self, target: &mut T) -> DateCarry {
        self.day += 1;
        if self.day <= self.days_in_current_month() {
            return DateCarry::Day;
        }
        self.day = 1;

        self.month += 1;
        if self.month <= 12 {
            return DateCarry::Month;
        }
        self.month = 1;
        self.year = self.year.wrapping_add(1);

        if let Some(hook) = self.on_year_end {
            hook(target);
        }
        DateCarry::Year
    }

    /// The same day in chrono's proleptic Gregorian calendar.
    ///
    /// `None` when the four-year rule produced a day chrono does not have
    /// (29 February of a century year) or the year is out of chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl<T> Clone for CalendarDate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CalendarDate<T> {}

impl<T> fmt::Debug for CalendarDate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarDate")
            .field("year", &self.year)
            .field("month", &self.month)
            .field("day", &self.day)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: &mut u32) {
        *n += 1;
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2, 2004), 29);
        assert_eq!(days_in_month(2, 2003), 28);
        for year in [1, 1999, 2000, 2024, 2025] {
            assert_eq!(days_in_month(4, year), 30);
            assert_eq!(days_in_month(6, year), 30);
            assert_eq!(days_in_month(9, year), 30);
            assert_eq!(days_in_month(11, year), 30);
            assert_eq!(days_in_month(1, year), 31);
            assert_eq!(days_in_month(12, year), 31);
        }
    }

    #[test]
    fn century_years_follow_the_four_year_rule() {
        assert!(is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2100));
        assert_eq!(days_in_month(2, 1900), 29);
    }

    #[test]
    fn negative_years_use_the_same_rule() {
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-3));
    }

    #[test]
    fn new_clamps_month_then_day() {
        assert_eq!(CalendarDate::new(2003, 2, 31).ymd(), (2003, 2, 28));
        assert_eq!(CalendarDate::new(2004, 2, 31).ymd(), (2004, 2, 29));
        assert_eq!(CalendarDate::new(2004, 13, 40).ymd(), (2004, 12, 31));
        assert_eq!(CalendarDate::new(2004, 0, 0).ymd(), (2004, 1, 1));
    }

    #[test]
    fn year_is_stored_as_given() {
        assert_eq!(CalendarDate::new(-7, 6, 15).year(), -7);
        assert_eq!(CalendarDate::new(0, 1, 1).year(), 0);
    }

    #[test]
    fn default_is_first_of_january_year_one() {
        assert_eq!(CalendarDate::default().ymd(), (1, 1, 1));
    }

    #[test]
    fn new_year_wraps_and_fires() {
        let mut fired = 0u32;
        let mut date = CalendarDate::new(2004, 12, 31).bind(count);

        assert_eq!(date.advance(&mut fired), DateCarry::Year);
        assert_eq!(date.ymd(), (2005, 1, 1));
        assert_eq!(fired, 1);
    }

    #[test]
    fn leap_day_is_reached() {
        let mut date = CalendarDate::new(2004, 2, 28);
        assert_eq!(date.advance(&mut ()), DateCarry::Day);
        assert_eq!(date.ymd(), (2004, 2, 29));
        assert_eq!(date.advance(&mut ()), DateCarry::Month);
        assert_eq!(date.ymd(), (2004, 3, 1));
    }

    #[test]
    fn common_year_skips_leap_day() {
        let mut date = CalendarDate::new(2003, 2, 28);
        assert_eq!(date.advance(&mut ()), DateCarry::Month);
        assert_eq!(date.ymd(), (2003, 3, 1));
    }

    #[test]
    fn thirty_day_month_rolls_over() {
        let mut fired = 0u32;
        let mut date = CalendarDate::new(2025, 4, 30).bind(count);
        assert_eq!(date.advance(&mut fired), DateCarry::Month);
        assert_eq!(date.ymd(), (2025, 5, 1));
        assert_eq!(fired, 0);
    }

    #[test]
    fn a_whole_leap_year_is_366_days() {
        let mut fired = 0u32;
        let mut date = CalendarDate::new(2004, 1, 1).bind(count);
        for _ in 0..366 {
            date.advance(&mut fired);
        }
        assert_eq!(date.ymd(), (2005, 1, 1));
        assert_eq!(fired, 1);
    }

    #[test]
    fn chrono_round_trip_for_ordinary_dates() {
        let naive = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date.ymd(), (2025, 7, 20));
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn century_leap_day_has_no_chrono_equivalent() {
        let mut date = CalendarDate::new(1900, 2, 28);
        date.advance(&mut ());
        assert_eq!(date.ymd(), (1900, 2, 29));
        assert_eq!(date.to_naive_date(), None);
    }
}
