// crates/travelrec-core/src/config.rs
use crate::loader::SourceLocation;
use crate::search::CountryMatch;
use std::env;
use std::time::Duration;

pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;
pub const DEFAULT_BOOTSTRAP_DELAY_MS: u64 = 1000;

/// Settings for a [`crate::session::SearchSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the dataset lives.
    pub location: SourceLocation,
    /// Wait before the single retry of a query that arrived before the data.
    pub retry_delay: Duration,
    /// Wait before running a query taken from a page link.
    pub bootstrap_delay: Duration,
    pub country_match: CountryMatch,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            location: SourceLocation::default(),
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            bootstrap_delay: Duration::from_millis(DEFAULT_BOOTSTRAP_DELAY_MS),
            country_match: CountryMatch::default(),
        }
    }
}

fn env_millis(key: &str, default: u64) -> Duration {
    let ms = env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

impl SessionConfig {
    /// Defaults overridden by `TRAVELREC_*` environment variables.
    ///
    /// Values that do not parse fall back to the default.
    pub fn from_env() -> Self {
        let location = env::var("TRAVELREC_SOURCE")
            .ok()
            .and_then(|v| SourceLocation::parse(&v).ok())
            .unwrap_or_default();

        let country_match = if env_flag("TRAVELREC_INCLUDE_CITIES") {
            CountryMatch::WithCities
        } else {
            CountryMatch::CountriesOnly
        };

        SessionConfig {
            location,
            retry_delay: env_millis("TRAVELREC_RETRY_DELAY_MS", DEFAULT_RETRY_DELAY_MS),
            bootstrap_delay: env_millis("TRAVELREC_BOOTSTRAP_DELAY_MS", DEFAULT_BOOTSTRAP_DELAY_MS),
            country_match,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_bootstrap_delay(mut self, delay: Duration) -> Self {
        self.bootstrap_delay = delay;
        self
    }

    pub fn with_country_match(mut self, mode: CountryMatch) -> Self {
        self.country_match = mode;
        self
    }
}
