// crates/travelrec-core/src/store.rs
use crate::catalog::Catalog;
use crate::error::{Result, TravelError};
use crate::loader::{parse_dataset, DatasetSource};
use crate::raw::RawDataset;
use once_cell::sync::OnceCell;
use std::sync::{Arc, PoisonError, RwLock};

// Process-wide slot for front ends that want one dataset per process.
static SHARED_STORE: OnceCell<DatasetStore> = OnceCell::new();

/// Where the store is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Debug, Default)]
struct Slot {
    catalog: Option<Arc<Catalog>>,
    in_flight: bool,
}

// Clears `in_flight` when a load finishes or its future is dropped.
struct InFlight<'a>(&'a RwLock<Slot>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight = false;
    }
}

/// Holder of the current dataset.
///
/// Starts empty. A successful [`DatasetStore::load`] swaps in a new
/// [`Catalog`] in one step, so readers only ever see "absent" or a complete
/// catalog. Once loaded, the store never goes back to `NotLoaded`; a reload
/// that fails keeps the previous catalog.
#[derive(Debug, Default)]
pub struct DatasetStore {
    slot: RwLock<Slot>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store shared by everything in this process.
    pub fn shared() -> &'static DatasetStore {
        SHARED_STORE.get_or_init(DatasetStore::new)
    }

    pub fn state(&self) -> LoadState {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match (&slot.catalog, slot.in_flight) {
            (Some(_), _) => LoadState::Loaded,
            (None, true) => LoadState::Loading,
            (None, false) => LoadState::NotLoaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == LoadState::Loaded
    }

    pub fn is_loading(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight
    }

    /// The current catalog, if a load has succeeded.
    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .catalog
            .clone()
    }

    /// Replace the stored dataset directly, bypassing any source.
    pub fn replace(&self, raw: RawDataset) -> Arc<Catalog> {
        let catalog = Arc::new(Catalog::new(raw));
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .catalog = Some(Arc::clone(&catalog));
        catalog
    }

    /// Fetch and parse the dataset from `source`, then store it.
    ///
    /// Only one load runs at a time; a second call while one is in flight
    /// fails with [`TravelError::LoadInProgress`]. Failures leave the slot as
    /// it was.
    pub async fn load<S>(&self, source: &S) -> Result<Arc<Catalog>>
    where
        S: DatasetSource + ?Sized,
    {
        {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            if slot.in_flight {
                return Err(TravelError::LoadInProgress);
            }
            slot.in_flight = true;
        }
        let _guard = InFlight(&self.slot);

        tracing::debug!(source = %source.describe(), "loading travel data");
        let result = source
            .fetch()
            .await
            .and_then(|bytes| parse_dataset(&bytes))
            .map(|raw| Arc::new(Catalog::new(raw)));

        match result {
            Ok(catalog) => {
                let stats = catalog.stats();
                tracing::info!(
                    countries = stats.countries,
                    cities = stats.cities,
                    temples = stats.temples,
                    beaches = stats.beaches,
                    "travel data loaded"
                );
                self.slot
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .catalog = Some(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "could not load travel data");
                Err(e)
            }
        }
    }
}
