use std::sync::Arc;

use contracts::enums::Sector;
use leptos::prelude::*;

use super::session::SectorSession;
use super::storage::{BrowserStorage, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("SectorProvider not found in component tree; wrap the app with <SectorProvider>")]
    ProviderMissing,
}

/// Reactive handle to the sector session.
#[derive(Clone, Copy)]
pub struct SectorContext {
    session: StoredValue<SectorSession>,
    sector: RwSignal<Sector>,
}

impl SectorContext {
    pub fn new(session: SectorSession) -> Self {
        let sector = RwSignal::new(session.sector());
        Self {
            session: StoredValue::new(session),
            sector,
        }
    }

    /// Current sector, tracked
    pub fn get_sector(&self) -> Sector {
        self.sector.get()
    }

    pub fn get_sector_untracked(&self) -> Sector {
        self.sector.get_untracked()
    }

    /// Overwrite the sector and persist it.
    pub fn set_sector(&self, sector: Sector) {
        log::debug!("set_sector: {}", sector);
        self.session.update_value(|s| s.set_sector(sector));
        self.sector.set(sector);
    }
}

/// Load the session from `store` and expose it to the current owner's subtree.
pub fn provide_sector(store: Arc<dyn KeyValueStore>) -> SectorContext {
    let ctx = SectorContext::new(SectorSession::load(store));
    provide_context(ctx);
    ctx
}

/// Sector context provider component. Uses browser storage unless a store
/// is passed in.
#[component]
pub fn SectorProvider(
    #[prop(optional)] store: Option<Arc<dyn KeyValueStore>>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Arc::new(BrowserStorage));
    provide_sector(store);

    children()
}

pub fn try_use_sector() -> Result<SectorContext, SessionError> {
    use_context::<SectorContext>().ok_or(SessionError::ProviderMissing)
}

/// Hook to access the sector context. Panics outside `SectorProvider`.
pub fn use_sector() -> SectorContext {
    match try_use_sector() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::sector::session::SECTOR_STORAGE_KEY;
    use crate::system::sector::storage::MemoryStorage;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_outside_provider_is_error() {
        assert_eq!(try_use_sector().err(), Some(SessionError::ProviderMissing));

        let owner = Owner::new();
        owner.with(|| {
            assert!(try_use_sector().is_err());
        });
    }

    #[test]
    #[should_panic(expected = "SectorProvider not found")]
    fn test_use_sector_fails_fast() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_sector();
        });
    }

    #[test]
    fn test_provider_reads_and_writes_storage() {
        let store = MemoryStorage::new();
        let owner = Owner::new();
        owner.with(|| {
            provide_sector(Arc::new(store.clone()));
            let ctx = try_use_sector().unwrap();
            assert_eq!(ctx.get_sector_untracked(), Sector::Celulares);

            ctx.set_sector(Sector::Informatica);
            assert_eq!(ctx.get_sector_untracked(), Sector::Informatica);
        });
        assert_eq!(store.get_item(SECTOR_STORAGE_KEY).as_deref(), Some("informatica"));

        // fresh mount over the same storage
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_sector(Arc::new(store.clone()));
            assert_eq!(ctx.get_sector_untracked(), Sector::Informatica);
        });
    }

    #[test]
    fn test_context_visible_to_child_owner() {
        let owner = Owner::new();
        owner.with(|| {
            provide_sector(Arc::new(MemoryStorage::new()));
            let child = Owner::new();
            child.with(|| {
                assert!(try_use_sector().is_ok());
            });
        });
    }
}
