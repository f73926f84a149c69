//! travelrec-rs: umbrella crate re-exporting `travelrec-core` for the demos.
pub use travelrec_core::*;
