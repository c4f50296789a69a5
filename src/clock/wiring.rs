use super::{BoundaryHook, CalendarDate, TimeCarry, TimeOfDay};

fn end_of_day(date: &mut CalendarDate) {
    date.advance(&mut ());
    debug!("day rolled over to {}-{}-{}", date.year(), date.month(), date.day());
}

/// A time of day whose midnight rollover advances a calendar date.
///
/// The date's own year-end hook takes `()` and is unbound unless the owner
/// installs one through [`Clockwork::set_year_end_hook`].
#[derive(Debug, Clone, Copy)]
pub struct Clockwork {
    date: CalendarDate,
    time: TimeOfDay<CalendarDate>,
}

impl Clockwork {
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self {
            date,
            time: time.bind(end_of_day),
        }
    }

    /// Advances one second; on midnight the date moves forward as well.
    pub fn tick(&mut self) -> TimeCarry {
        self.time.advance(&mut self.date)
    }

    pub fn date(&self) -> &CalendarDate {
        &self.date
    }

    pub fn time(&self) -> &TimeOfDay<CalendarDate> {
        &self.time
    }

    pub fn set_year_end_hook(&mut self, hook: Option<BoundaryHook<()>>) {
        match hook {
            Some(hook) => self.date = self.date.bind(hook),
            None => self.date.unbind(),
        }
    }
}

impl Default for Clockwork {
    fn default() -> Self {
        Self::new(CalendarDate::default(), TimeOfDay::default())
    }
}
