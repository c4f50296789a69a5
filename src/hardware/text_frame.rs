use core::convert::Infallible;

use super::traits::CharDisplay;

/// In-memory character display, for running the clock off-target.
///
/// Text past the last column is dropped. Characters outside printable
/// ASCII are stored as `?`.
#[derive(Debug, Clone)]
pub struct TextFrame<const ROWS: usize, const COLS: usize> {
    cells: [[u8; COLS]; ROWS],
    row: usize,
    col: usize,
    flushes: usize,
}

impl<const ROWS: usize, const COLS: usize> TextFrame<ROWS, COLS> {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            row: 0,
            col: 0,
            flushes: 0,
        }
    }

    /// Full row including trailing blanks; empty for a row that does not exist.
    pub fn line(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl<const ROWS: usize, const COLS: usize> Default for TextFrame<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> CharDisplay for TextFrame<ROWS, COLS> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.cells = [[b' '; COLS]; ROWS];
        self.row = 0;
        self.col = 0;
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        self.row = (row as usize).min(ROWS.saturating_sub(1));
        self.col = (col as usize).min(COLS);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        for ch in text.chars() {
            if self.col >= COLS {
                break;
            }
            if let Some(cells) = self.cells.get_mut(self.row) {
                cells[self.col] = if ch.is_ascii_graphic() || ch == ' ' {
                    ch as u8
                } else {
                    b'?'
                };
            }
            self.col += 1;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}
