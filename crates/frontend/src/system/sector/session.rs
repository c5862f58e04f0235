use std::sync::Arc;

use contracts::enums::Sector;

use super::storage::KeyValueStore;

/// Storage key of the selected sector
pub const SECTOR_STORAGE_KEY: &str = "selected-sector";

/// The active sector of one running session together with the storage it
/// is mirrored to.
#[derive(Clone)]
pub struct SectorSession {
    sector: Sector,
    store: Arc<dyn KeyValueStore>,
}

impl SectorSession {
    /// Restore the session from storage. A missing or unrecognized value
    /// falls back to the default sector.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let sector = read_stored_sector(store.as_ref());
        log::debug!("sector session loaded: {}", sector);
        Self { sector, store }
    }

    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// Switch sector and persist it. A failed write keeps the in-memory value.
    pub fn set_sector(&mut self, sector: Sector) {
        self.sector = sector;
        if let Err(e) = self.store.set_item(SECTOR_STORAGE_KEY, sector.code()) {
            log::warn!("could not persist sector '{}': {}", sector, e);
        }
    }
}

fn read_stored_sector(store: &dyn KeyValueStore) -> Sector {
    match store.get_item(SECTOR_STORAGE_KEY) {
        None => Sector::default(),
        Some(raw) => Sector::from_code(&raw).unwrap_or_else(|| {
            log::warn!("ignoring unknown stored sector {:?}", raw);
            Sector::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::sector::storage::MemoryStorage;

    #[test]
    fn test_empty_storage_defaults_to_celulares() {
        let session = SectorSession::load(Arc::new(MemoryStorage::new()));
        assert_eq!(session.sector(), Sector::Celulares);
    }

    #[test]
    fn test_set_sector_survives_reload() {
        let store = MemoryStorage::new();
        for sector in Sector::all() {
            let mut session = SectorSession::load(Arc::new(store.clone()));
            session.set_sector(sector);
            assert_eq!(session.sector(), sector);

            let reloaded = SectorSession::load(Arc::new(store.clone()));
            assert_eq!(reloaded.sector(), sector);
        }
        let last = Sector::all()[Sector::all().len() - 1];
        assert_eq!(store.get_item(SECTOR_STORAGE_KEY).as_deref(), Some(last.code()));
    }

    #[test]
    fn test_unknown_stored_value_is_not_trusted() {
        let store = MemoryStorage::new();
        store.set_item(SECTOR_STORAGE_KEY, "INFORMATICA").unwrap();
        let session = SectorSession::load(Arc::new(store.clone()));
        assert_eq!(session.sector(), Sector::Celulares);

        store.set_item(SECTOR_STORAGE_KEY, "garbage").unwrap();
        let session = SectorSession::load(Arc::new(store));
        assert_eq!(session.sector(), Sector::Celulares);
    }

    #[test]
    fn test_any_transition_allowed() {
        let mut session = SectorSession::load(Arc::new(MemoryStorage::new()));
        session.set_sector(Sector::Informatica);
        session.set_sector(Sector::Informatica);
        assert_eq!(session.sector(), Sector::Informatica);
        session.set_sector(Sector::Celulares);
        assert_eq!(session.sector(), Sector::Celulares);
    }
}
