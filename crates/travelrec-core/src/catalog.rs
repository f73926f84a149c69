// crates/travelrec-core/src/catalog.rs
use crate::error::Result;
use crate::model::{DisplayRecord, Kind};
use crate::normalize::normalize;
use crate::raw::RawDataset;
use crate::search::{search_with, CountryMatch};
use serde::{Deserialize, Serialize};

/// Simple aggregate counts for a loaded dataset.
///
/// Computed from the raw document, so `total()` is the length the flattened
/// record list must have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}

impl CatalogStats {
    pub fn of(raw: &RawDataset) -> Self {
        CatalogStats {
            countries: raw.countries.len(),
            cities: raw.city_count(),
            temples: raw.temples.len(),
            beaches: raw.beaches.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.countries + self.cities + self.temples + self.beaches
    }
}

/// A loaded dataset together with its flattened records.
///
/// The raw document never changes after load, so normalizing once here gives
/// the same records a per-query normalization would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    raw: RawDataset,
    records: Vec<DisplayRecord>,
}

impl Catalog {
    pub fn new(raw: RawDataset) -> Self {
        let records = normalize(&raw);
        Catalog { raw, records }
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::of(&self.raw)
    }

    pub fn of_kind(&self, kind: Kind) -> Vec<&DisplayRecord> {
        self.records.iter().filter(|r| r.kind == kind).collect()
    }

    pub fn search(&self, query: &str, mode: CountryMatch) -> Result<Vec<&DisplayRecord>> {
        search_with(&self.records, query, mode)
    }
}

impl From<RawDataset> for Catalog {
    fn from(raw: RawDataset) -> Self {
        Catalog::new(raw)
    }
}
