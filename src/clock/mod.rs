//! Date/time model: two cascading counters and the wiring between them.

pub mod calendar_date;
pub mod clamp;
pub mod time_of_day;
pub mod wiring;

pub use calendar_date::{CalendarDate, DateCarry, days_in_month, is_leap_year};
pub use clamp::clamp;
pub use time_of_day::{TimeCarry, TimeOfDay};
pub use wiring::Clockwork;

/// Hook fired when a counter's coarsest field rolls over.
///
/// The target is lent by the caller of `advance`, never by the counter
/// itself, so a hook cannot reach back into the counter that fired it.
pub type BoundaryHook<T> = fn(&mut T);
