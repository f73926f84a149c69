//! travelrec-cli
//! =============
//!
//! Command-line interface for the `travelrec-core` destination search.
//!
//! The binary (`travelrec`) is the primary deliverable. The library target
//! holds the terminal renderer so it can be tested without a terminal.
//!
//! Basic usage:
//!
//! ```text
//! travelrec --help
//! travelrec stats
//! travelrec search beaches
//! travelrec --source https://example.com/travel_recommendation_api.json search kyoto
//! travelrec link "travel.html?search=temples"
//! ```
//!
//! For programmatic access use the [`travelrec-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod terminal;
