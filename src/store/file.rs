//! Win store backed by a JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::Result;
use super::table::WinTable;
use super::traits::WinStore;

/// Keeps the win record in a single JSON file.
///
/// The file is rewritten in full on every save. A missing file is an empty
/// record; so is one that cannot be read or parsed.
#[derive(Clone, Debug)]
pub struct JsonFileWinStore {
    path: PathBuf,
}

impl JsonFileWinStore {
    /// Store at `path`. Nothing is touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WinStore for JsonFileWinStore {
    fn load(&self) -> WinTable {
        match fs::read_to_string(&self.path) {
            Ok(raw) => WinTable::decode(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => WinTable::default(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "unreadable win record, starting from empty");
                WinTable::default()
            }
        }
    }

    fn set_all(&mut self, table: &WinTable) -> Result<()> {
        let encoded = table.encode()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encoded)?;
        debug!(path = %self.path.display(), entries = table.len(), "win record saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
