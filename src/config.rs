//! Compiled-in startup settings.

use crate::clock::{CalendarDate, Clockwork, TimeOfDay};

/// PCF8574 backpack address with A0..A2 left open.
pub const LCD_ADDRESS: u8 = 0x27;
pub const LCD_ROWS: u8 = 2;
pub const LCD_COLS: u8 = 16;

/// Shown in place of the clock while the IR sensor sees something.
pub const STATUS_MESSAGE: &str = "Detecting Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Raw (year, month, day); clamped on use.
    pub start_date: (i32, i32, i32),
    /// Raw (hour, minute, second); clamped on use.
    pub start_time: (i32, i32, i32),
    pub lcd_address: u8,
    pub tick_period_ms: u64,
    pub status_message: &'static str,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        start_date: (2004, 12, 31),
        start_time: (23, 59, 56),
        lcd_address: LCD_ADDRESS,
        tick_period_ms: 1000,
        status_message: STATUS_MESSAGE,
    };

    pub fn clockwork(&self) -> Clockwork {
        let (year, month, day) = self.start_date;
        let (hour, minute, second) = self.start_time;
        Clockwork::new(
            CalendarDate::new(year, month, day),
            TimeOfDay::new(hour, minute, second),
        )
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
