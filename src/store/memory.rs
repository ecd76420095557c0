//! Win store held in memory.

use super::error::Result;
use super::table::WinTable;
use super::traits::WinStore;

/// Keeps the encoded record as text, exactly as a key-value store would.
///
/// Holding the text rather than a `WinTable` lets callers seed it with
/// whatever a previous session (or a corrupted one) left behind.
#[derive(Clone, Debug, Default)]
pub struct MemoryWinStore {
    raw: Option<String>,
}

impl MemoryWinStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with raw record text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The stored text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl WinStore for MemoryWinStore {
    fn load(&self) -> WinTable {
        self.raw.as_deref().map(WinTable::decode).unwrap_or_default()
    }

    fn set_all(&mut self, table: &WinTable) -> Result<()> {
        self.raw = Some(table.encode()?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryWinStore::new();
        assert!(store.load().is_empty());
        assert_eq!(store.get("Alice"), 0);
    }

    #[test]
    fn test_set_all_overwrites() {
        let mut store = MemoryWinStore::with_raw(r#"{"OldPlayer":10}"#);
        let mut table = WinTable::new();
        table.set("Alice", 5);

        store.set_all(&table).unwrap();

        assert_eq!(store.get("OldPlayer"), 0);
        assert_eq!(store.get("Alice"), 5);
    }

    #[test]
    fn test_corrupted_raw() {
        let store = MemoryWinStore::with_raw("invalid json");
        assert_eq!(store.get("Alice"), 0);
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryWinStore::with_raw(r#"{"Alice":5}"#);
        store.clear().unwrap();
        assert!(store.raw().is_none());
    }
}
