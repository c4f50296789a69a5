/// Character-cell display addressed by row and column.
pub trait CharDisplay {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error>;
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Pushes buffered content to the panel. Unbuffered displays have nothing to do.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub trait ObjectSensor {
    type Error;

    fn object_present(&mut self) -> Result<bool, Self::Error>;
}
