// crates/travelrec-core/src/session.rs

//! # Query Session
//!
//! The caller-facing flow around a [`DatasetStore`]: queries that arrive
//! before the data are deferred and retried exactly once after a fixed delay,
//! blank queries get a validation status, and every outcome ends in a status
//! update on the [`Renderer`].

use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::error::{Result, TravelError};
use crate::link::search_param;
use crate::loader::DatasetSource;
use crate::render::{Renderer, StatusMessage};
use crate::store::{DatasetStore, LoadState};
use std::sync::{Arc, Mutex, PoisonError};

/// What the input side can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search button, with the current keyword.
    Search(String),
    /// Enter pressed in the keyword input.
    Enter(String),
    Clear,
}

/// How a query ended.
#[derive(Debug)]
pub enum QueryOutcome {
    /// Blank keyword; zero records rendered.
    Invalid,
    /// The query ran; this many records were rendered (possibly zero).
    Shown(usize),
    /// The data was still loading after the single retry.
    Deferred,
    /// Loading the data failed.
    Failed(TravelError),
}

pub struct SearchSession<'s, S, R> {
    store: &'s DatasetStore,
    source: S,
    renderer: R,
    config: SessionConfig,
    status: Mutex<StatusMessage>,
}

impl<'s, R: Renderer> SearchSession<'s, Box<dyn DatasetSource>, R> {
    /// Session reading from `config.location`.
    pub fn from_config(store: &'s DatasetStore, renderer: R, config: SessionConfig) -> Result<Self> {
        let source = config.location.clone().into_source()?;
        Ok(SearchSession::new(store, source, renderer, config))
    }
}

impl<'s, S: DatasetSource, R: Renderer> SearchSession<'s, S, R> {
    pub fn new(store: &'s DatasetStore, source: S, renderer: R, config: SessionConfig) -> Self {
        SearchSession {
            store,
            source,
            renderer,
            config,
            status: Mutex::new(StatusMessage::Prompt),
        }
    }

    pub fn state(&self) -> LoadState {
        self.store.state()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The status most recently sent to the renderer.
    pub fn status(&self) -> StatusMessage {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_status(&self, status: StatusMessage) {
        self.renderer.show_status(&status);
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }

    fn report_load_failure(&self, err: &TravelError) {
        self.set_status(StatusMessage::LoadFailed(err.to_string()));
    }

    /// Startup load. A failure is shown on the status line and returned.
    pub async fn initialize(&self) -> Result<Arc<Catalog>> {
        match self.store.load(&self.source).await {
            Ok(catalog) => {
                if self.status().is_load_failure() {
                    self.set_status(StatusMessage::Prompt);
                }
                Ok(catalog)
            }
            Err(TravelError::LoadInProgress) => Err(TravelError::LoadInProgress),
            Err(e) => {
                self.report_load_failure(&e);
                Err(e)
            }
        }
    }

    /// Run one keyword query.
    pub async fn run_query(&self, keyword: &str) -> QueryOutcome {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.renderer.show_results(&[]);
            self.set_status(StatusMessage::InvalidQuery);
            return QueryOutcome::Invalid;
        }

        if let Some(catalog) = self.store.current() {
            return self.execute(&catalog, keyword);
        }

        tracing::warn!(keyword, "data not loaded yet, deferring query");
        self.set_status(StatusMessage::Waiting);

        if !self.store.is_loading() {
            match self.store.load(&self.source).await {
                Ok(_) | Err(TravelError::LoadInProgress) => {}
                Err(e) => {
                    self.report_load_failure(&e);
                    return QueryOutcome::Failed(e);
                }
            }
        }

        tokio::time::sleep(self.config.retry_delay).await;

        match self.store.current() {
            Some(catalog) => self.execute(&catalog, keyword),
            None => {
                tracing::warn!(keyword, "travel data still loading after retry; query left pending");
                QueryOutcome::Deferred
            }
        }
    }

    fn execute(&self, catalog: &Catalog, keyword: &str) -> QueryOutcome {
        match catalog.search(keyword, self.config.country_match) {
            Ok(hits) => {
                self.renderer.show_results(&hits);
                self.set_status(StatusMessage::for_results(hits.len()));
                QueryOutcome::Shown(hits.len())
            }
            Err(e) => {
                tracing::debug!(error = %e, "query rejected");
                self.renderer.show_results(&[]);
                self.set_status(StatusMessage::InvalidQuery);
                QueryOutcome::Invalid
            }
        }
    }

    /// Reset the keyword, the cards and the status line.
    pub fn clear(&self) {
        self.renderer.reset_input();
        self.renderer.show_results(&[]);
        self.set_status(StatusMessage::Prompt);
    }

    /// Dispatch one input event. `Clear` has no query outcome.
    pub async fn handle(&self, event: InputEvent) -> Option<QueryOutcome> {
        match event {
            InputEvent::Search(keyword) | InputEvent::Enter(keyword) => {
                Some(self.run_query(&keyword).await)
            }
            InputEvent::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Run the query carried in a page link's `search` parameter, if any,
    /// after the bootstrap delay.
    pub async fn bootstrap(&self, location: &str) -> Option<QueryOutcome> {
        let keyword = search_param(location)?;
        self.renderer.set_input(&keyword);
        tokio::time::sleep(self.config.bootstrap_delay).await;
        Some(self.run_query(&keyword).await)
    }
}
