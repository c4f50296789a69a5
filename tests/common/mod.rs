#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation};

/// I2C bus that keeps every write.
#[derive(Default)]
pub struct RecordingBus {
    pub writes: Vec<Vec<u8>>,
}

impl ErrorType for RecordingBus {
    type Error = Infallible;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            if let Operation::Write(bytes) = op {
                self.writes.push(bytes.to_vec());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Bus
    }
}

/// I2C bus that fails every transaction while the shared switch is on.
pub struct FlakyBus {
    pub down: Rc<Cell<bool>>,
}

impl ErrorType for FlakyBus {
    type Error = BusFault;
}

impl I2c for FlakyBus {
    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.down.get() {
            Err(BusFault)
        } else {
            Ok(())
        }
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Replays PCF8574 traffic of an HD44780 in 4-bit mode and returns what a
/// 16x2 panel would show. Expects traffic after the init handshake, where
/// every byte goes out as two nibble writes.
pub fn decode_lcd(writes: &[Vec<u8>]) -> [String; 2] {
    const RS: u8 = 0x01;

    let mut rows = [vec![b' '; 16], vec![b' '; 16]];
    let mut cursor: (usize, usize) = (0, 0);
    let mut pending: Option<u8> = None;

    for write in writes.iter().filter(|w| w.len() == 3) {
        let bits = write[0];
        let nibble = bits & 0xF0;
        let Some(high) = pending.take() else {
            pending = Some(bits);
            continue;
        };
        let value = (high & 0xF0) | (nibble >> 4);
        if high & RS != 0 {
            let (row, col) = cursor;
            if col < 16 {
                rows[row][col] = value;
            }
            cursor.1 += 1;
        } else if value == 0x01 {
            rows = [vec![b' '; 16], vec![b' '; 16]];
            cursor = (0, 0);
        } else if value & 0x80 != 0 {
            let address = value & 0x7F;
            cursor = if address >= 0x40 {
                (1, (address - 0x40) as usize)
            } else {
                (0, address as usize)
            };
        }
    }

    rows.map(|row| String::from_utf8(row).unwrap())
}
