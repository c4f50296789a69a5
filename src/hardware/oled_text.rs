use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_8X13},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ssd1306::{
    Ssd1306, mode::BufferedGraphicsMode, prelude::WriteOnlyDataCommand, size::DisplaySize,
};

use super::traits::CharDisplay;

const CELL_WIDTH: u32 = 8;
// 13 px glyphs plus 3 px leading
const ROW_PITCH: u32 = 16;

/// Monochrome target whose drawing is buffered until flushed.
pub trait FlushTarget: DrawTarget<Color = BinaryColor> {
    fn flush_frame(&mut self) -> Result<(), Self::Error>;
}

impl<DI, SIZE> FlushTarget for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn flush_frame(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }
}

/// Character-cell view of a pixel display, 8x13 glyphs on a 8x16 grid.
/// A 128x64 panel gives 4 rows of 16 columns.
pub struct TextGrid<T> {
    target: T,
    style: MonoTextStyle<'static, BinaryColor>,
    rows: u8,
    cols: u8,
    row: u8,
    col: u8,
}

impl<T: FlushTarget> TextGrid<T> {
    pub fn new(target: T) -> Self {
        let size = target.bounding_box().size;
        Self {
            rows: (size.height / ROW_PITCH).clamp(1, u8::MAX as u32) as u8,
            cols: (size.width / CELL_WIDTH).min(u8::MAX as u32) as u8,
            target,
            style: MonoTextStyle::new(&FONT_8X13, BinaryColor::On),
            row: 0,
            col: 0,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.cols
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn release(self) -> T {
        self.target
    }
}

impl<T: FlushTarget> CharDisplay for TextGrid<T> {
    type Error = T::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.row = 0;
        self.col = 0;
        self.target.clear(BinaryColor::Off)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        self.row = row.min(self.rows - 1);
        self.col = col;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        let origin = Point::new(
            (self.col as u32 * CELL_WIDTH) as i32,
            (self.row as u32 * ROW_PITCH) as i32,
        );
        Text::with_baseline(text, origin, self.style, Baseline::Top).draw(&mut self.target)?;
        let advanced = text.chars().count().min(u8::MAX as usize) as u8;
        self.col = self.col.saturating_add(advanced);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.target.flush_frame()
    }
}
