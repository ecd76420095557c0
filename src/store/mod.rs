//! Persisted win counters.
//!
//! Wins are kept in a single record mapping player name to win count. The
//! record is read when players are seated and overwritten wholesale whenever
//! a count changes. Stores are injected into the session controller so the
//! backing medium can be swapped: `MemoryWinStore` for embedding and tests,
//! `JsonFileWinStore` for a file on disk.
//!
//! Reading never fails. A missing, unreadable or corrupted record loads as
//! an empty table and every player starts at zero wins.

mod error;
mod file;
mod memory;
mod table;
mod traits;

pub use error::{Result, StoreError};
pub use file::JsonFileWinStore;
pub use memory::MemoryWinStore;
pub use table::WinTable;
pub use traits::WinStore;
