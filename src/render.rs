//! Text for the two display rows.

use core::fmt::Write;

use heapless::String;

use crate::clock::{CalendarDate, TimeOfDay};
use crate::hardware::traits::CharDisplay;

pub const DATE_ROW: u8 = 0;
pub const TIME_ROW: u8 = 1;

/// Zero-pads 0..=9 to two digits; everything else is printed as is.
pub fn format_two_digit(n: i32) -> String<11> {
    let mut buf = String::new();
    // 11 bytes hold any i32
    let _ = write!(buf, "{:02}", n);
    buf
}

/// `DD/MM/YYYY`, year unpadded.
pub fn date_line<T>(date: &CalendarDate<T>) -> String<17> {
    let mut buf = String::new();
    let _ = write!(
        buf,
        "{}/{}/{}",
        format_two_digit(date.day() as i32),
        format_two_digit(date.month() as i32),
        date.year()
    );
    buf
}

/// `HH:MM:SS`.
pub fn time_line<T>(time: &TimeOfDay<T>) -> String<8> {
    let mut buf = String::new();
    let _ = write!(
        buf,
        "{}:{}:{}",
        format_two_digit(time.hour() as i32),
        format_two_digit(time.minute() as i32),
        format_two_digit(time.second() as i32)
    );
    buf
}

pub fn show_date<D: CharDisplay, T>(
    display: &mut D,
    date: &CalendarDate<T>,
) -> Result<(), D::Error> {
    display.set_cursor(DATE_ROW, 0)?;
    display.print(&date_line(date))
}

pub fn show_time<D: CharDisplay, T>(
    display: &mut D,
    time: &TimeOfDay<T>,
) -> Result<(), D::Error> {
    display.set_cursor(TIME_ROW, 0)?;
    display.print(&time_line(time))
}
