// crates/travelrec-core/src/render.rs
use crate::model::DisplayRecord;
use std::fmt;

/// Status line shown next to the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Default prompt before any query and after a clear.
    Prompt,
    Found(usize),
    NoResults,
    InvalidQuery,
    /// A query arrived before the dataset did.
    Waiting,
    LoadFailed(String),
}

impl StatusMessage {
    /// Status for a finished query with `count` matches.
    pub fn for_results(count: usize) -> Self {
        if count == 0 {
            StatusMessage::NoResults
        } else {
            StatusMessage::Found(count)
        }
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self, StatusMessage::LoadFailed(_))
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Prompt => f.write_str("Type a keyword and click Search."),
            StatusMessage::Found(n) => write!(f, "Found {n} result(s)."),
            StatusMessage::NoResults => f.write_str("No results found. Try another keyword."),
            StatusMessage::InvalidQuery => f.write_str("Please enter a valid search query."),
            StatusMessage::Waiting => f.write_str("Data not loaded yet. Please wait..."),
            StatusMessage::LoadFailed(reason) => {
                write!(f, "Could not load travel data: {reason}.")
            }
        }
    }
}

/// The presentation side of a search session: it shows cards and a status
/// line, and owns the keyword input.
///
/// Methods take `&self` so one renderer can serve queries that overlap while
/// a load is pending; implementations use interior mutability if they keep
/// state.
pub trait Renderer: Send + Sync {
    /// Replace the displayed cards. An empty slice clears them.
    fn show_results(&self, records: &[&DisplayRecord]);

    fn show_status(&self, status: &StatusMessage);

    /// Put `keyword` into the input (query-string bootstrap).
    fn set_input(&self, _keyword: &str) {}

    fn reset_input(&self) {}
}

impl<R: Renderer + ?Sized> Renderer for std::sync::Arc<R> {
    fn show_results(&self, records: &[&DisplayRecord]) {
        (**self).show_results(records)
    }

    fn show_status(&self, status: &StatusMessage) {
        (**self).show_status(status)
    }

    fn set_input(&self, keyword: &str) {
        (**self).set_input(keyword)
    }

    fn reset_input(&self) {
        (**self).reset_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_texts() {
        assert_eq!(StatusMessage::for_results(3).to_string(), "Found 3 result(s).");
        assert_eq!(
            StatusMessage::for_results(0).to_string(),
            "No results found. Try another keyword."
        );
        assert_eq!(
            StatusMessage::InvalidQuery.to_string(),
            "Please enter a valid search query."
        );
        assert_eq!(
            StatusMessage::LoadFailed("HTTP error: 404".into()).to_string(),
            "Could not load travel data: HTTP error: 404."
        );
    }
}
