// crates/travelrec-core/src/lib.rs

pub mod catalog;
pub mod config;
pub mod error;
pub mod link;
pub mod loader; // The public loader
pub mod model;
pub mod normalize;
pub mod raw;
pub mod render; // Renderer trait + status texts
pub mod search;
#[cfg(feature = "runtime")]
pub mod session;
pub mod store;

// Re-exports
pub use crate::catalog::{Catalog, CatalogStats};
pub use crate::config::SessionConfig;
pub use crate::error::{Result, TravelError};
pub use crate::link::search_param;
pub use crate::loader::{parse_dataset, DatasetSource, FileSource, SourceLocation, StaticSource};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpSource;
pub use crate::model::{DisplayRecord, Kind};
pub use crate::normalize::normalize;
pub use crate::raw::RawDataset;
pub use crate::render::{Renderer, StatusMessage};
pub use crate::search::{search, search_with, CountryMatch};
#[cfg(feature = "runtime")]
pub use crate::session::{InputEvent, QueryOutcome, SearchSession};
pub use crate::store::{DatasetStore, LoadState};

pub mod prelude {
    //! travelrec prelude: bring common types and traits into scope for demos.
    //!
    //! The one-parameter `Result` alias is left out so it does not shadow
    //! `std::result::Result` in glob-importing crates.
    pub use crate::{
        normalize, parse_dataset, search, search_param, search_with, Catalog, CatalogStats,
        CountryMatch, DatasetSource, DatasetStore, DisplayRecord, FileSource, Kind, LoadState,
        RawDataset, Renderer, SessionConfig, SourceLocation, StaticSource, StatusMessage,
        TravelError,
    };
    #[cfg(feature = "runtime")]
    pub use crate::{InputEvent, QueryOutcome, SearchSession};
}
