//! Sector session: the operating sector selected by the user, persisted in
//! browser storage and shared with the layout through context.

pub mod context;
pub mod sector_select;
pub mod session;
pub mod storage;

pub use context::{provide_sector, try_use_sector, use_sector, SectorContext, SectorProvider, SessionError};
pub use sector_select::SectorSelect;
pub use session::{SectorSession, SECTOR_STORAGE_KEY};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
