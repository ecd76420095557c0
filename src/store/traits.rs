//! The store seam.

use super::error::Result;
use super::table::WinTable;

/// Backing storage for the win record.
pub trait WinStore {
    /// Read the whole record. Unreadable data loads as an empty table.
    fn load(&self) -> WinTable;

    /// Replace the whole record.
    fn set_all(&mut self, table: &WinTable) -> Result<()>;

    /// Delete the record.
    fn clear(&mut self) -> Result<()>;

    /// Wins recorded for `name`, 0 if unknown.
    fn get(&self, name: &str) -> u32 {
        self.load().get(name)
    }
}

impl<S: WinStore + ?Sized> WinStore for Box<S> {
    fn load(&self) -> WinTable {
        (**self).load()
    }

    fn set_all(&mut self, table: &WinTable) -> Result<()> {
        (**self).set_all(table)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn get(&self, name: &str) -> u32 {
        (**self).get(name)
    }
}
