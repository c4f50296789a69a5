use embedded_hal::{delay::DelayNs, i2c::I2c};

use super::traits::CharDisplay;
use crate::config::{LCD_COLS, LCD_ROWS};

// PCF8574 pin mapping on the common backpack: P0 RS, P1 RW, P2 EN, P3 backlight, P4..P7 D4..D7
const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CLEAR_DISPLAY: u8 = 0x01;
const RETURN_HOME: u8 = 0x02;
const ENTRY_MODE_SET: u8 = 0x04;
const DISPLAY_CONTROL: u8 = 0x08;
const FUNCTION_SET: u8 = 0x20;
const SET_DDRAM_ADDR: u8 = 0x80;

const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const TWO_LINE: u8 = 0x08;

const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 character LCD driven in 4-bit mode through a PCF8574 I2C expander.
///
/// Each nibble goes out as one three-byte write (data, data + EN, data), so
/// the enable pulse is as long as one byte on the bus.
pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    rows: u8,
    cols: u8,
    backlight: u8,
}

impl<I2C, D> Lcd1602<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            rows: LCD_ROWS,
            cols: LCD_COLS,
            backlight: BACKLIGHT,
        }
    }

    /// Panel size for modules other than 16x2. Rows are limited to 1..=4.
    pub fn with_geometry(mut self, rows: u8, cols: u8) -> Self {
        self.rows = rows.clamp(1, ROW_OFFSETS.len() as u8);
        self.cols = cols;
        self
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.cols
    }

    /// Power-on sequence: reset into 4-bit mode, configure lines, display on,
    /// clear, left-to-right entry, cursor home, backlight on.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.delay.delay_ms(50);
        self.expander_write(0)?;
        self.delay.delay_ms(1000);

        // Three 8-bit function sets resynchronise the controller whatever
        // state it woke up in, the fourth switches the bus to 4 bits.
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20)?;

        let lines = if self.rows > 1 { TWO_LINE } else { 0 };
        self.command(FUNCTION_SET | lines)?;
        self.command(DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(ENTRY_MODE_SET | ENTRY_LEFT)?;
        self.home()?;

        debug!("lcd ready at {:#x}", self.address);
        Ok(())
    }

    pub fn home(&mut self) -> Result<(), I2C::Error> {
        self.command(RETURN_HOME)?;
        self.delay.delay_us(2000);
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.backlight = if on { BACKLIGHT } else { 0 };
        self.expander_write(0)
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.send(value, 0)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), I2C::Error> {
        self.write_nibble((value & 0xF0) | mode)?;
        self.write_nibble((value << 4) | mode)
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), I2C::Error> {
        let bits = bits | self.backlight;
        self.i2c.write(self.address, &[bits, bits | EN, bits])
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[bits | self.backlight])
    }
}

impl<I2C, D> CharDisplay for Lcd1602<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_us(2000);
        Ok(())
    }

    /// Rows past the bottom land on the last row, like the Arduino driver.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        let row = row.min(self.rows - 1);
        let address = col.wrapping_add(ROW_OFFSETS[row as usize]);
        self.command(SET_DDRAM_ADDR | address)
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            self.send(byte, RS)?;
        }
        Ok(())
    }
}
