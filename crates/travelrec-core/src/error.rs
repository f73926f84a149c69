// crates/travelrec-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between fetching the dataset and filtering it.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The dataset resource answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Load { status: u16 },

    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The body was not a travel dataset document.
    #[error("Invalid travel data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Please enter a valid search query.")]
    EmptyQuery,

    #[error("A dataset load is already in flight")]
    LoadInProgress,

    #[error("Invalid location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },
}

impl TravelError {
    /// `true` for failures of the fetch itself (status, transport, missing file).
    pub fn is_load_error(&self) -> bool {
        match self {
            TravelError::Load { .. } | TravelError::NotFound(_) | TravelError::Io(_) => true,
            #[cfg(feature = "fetch")]
            TravelError::Http(_) => true,
            _ => false,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, TravelError::Parse(_))
    }

    /// HTTP status carried by a [`TravelError::Load`].
    pub fn status(&self) -> Option<u16> {
        match self {
            TravelError::Load { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_the_status() {
        let err = TravelError::Load { status: 404 };
        assert_eq!(err.to_string(), "HTTP error: 404");
        assert!(err.is_load_error());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn parse_error_is_not_a_load_error() {
        let err: TravelError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_parse_error());
        assert!(!err.is_load_error());
    }
}
