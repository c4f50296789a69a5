use core::fmt;

use chrono::{NaiveTime, Timelike};

use super::{BoundaryHook, clamp};

/// Coarsest field touched by a single [`TimeOfDay::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeCarry {
    Second,
    Minute,
    Hour,
    /// 23:59:59 wrapped to 00:00:00 and the day-end hook (if any) ran.
    Day,
}

/// Hour/minute/second counter with a day-end hook.
///
/// `T` is the type the hook operates on. An unbound counter uses `()`.
pub struct TimeOfDay<T = ()> {
    hour: u8,
    minute: u8,
    second: u8,
    on_day_end: Option<BoundaryHook<T>>,
}

impl TimeOfDay {
    /// Builds a counter from raw values, clamping each field into range.
    ///
    /// Out-of-range input is clipped, not rejected: `new(25, 70, -1)` is 23:59:00.
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour: clamp(hour, 0, 23) as u8,
            minute: clamp(minute, 0, 59) as u8,
            second: clamp(second, 0, 59) as u8,
            on_day_end: None,
        }
    }
}

impl<T> TimeOfDay<T> {
    /// Installs `hook` as the day-end subscriber, replacing any previous one.
    pub fn bind<U>(self, hook: BoundaryHook<U>) -> TimeOfDay<U> {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            on_day_end: Some(hook),
        }
    }

    pub fn unbind(&mut self) {
        self.on_day_end = None;
    }

    pub fn is_bound(&self) -> bool {
        self.on_day_end.is_some()
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn hms(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    pub fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Moves forward one second, cascading into minute and hour.
    ///
    /// When the hour wraps past 23 the day-end hook runs synchronously
    /// with `target` before this returns.
    pub fn advance(&mut self, target: &mut T) -> TimeCarry {
        self.second += 1;
        if self.second < 60 {
            return TimeCarry::Second;
        }
        self.second = 0;

        self.minute += 1;
        if self.minute < 60 {
            return TimeCarry::Minute;
        }
        self.minute = 0;

        self.hour += 1;
        if self.hour < 24 {
            return TimeCarry::Hour;
        }
        self.hour = 0;

        if let Some(hook) = self.on_day_end {
            hook(target);
        }
        TimeCarry::Day
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl<T> Clone for TimeOfDay<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TimeOfDay<T> {}

impl<T> fmt::Debug for TimeOfDay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeOfDay")
            .field("hour", &self.hour)
            .field("minute", &self.minute)
            .field("second", &self.second)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // chrono parks leap seconds in the nanosecond field, second() stays < 60
        Self::new(time.hour() as i32, time.minute() as i32, time.second() as i32)
    }
}
