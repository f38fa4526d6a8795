//! EventListController: owns the FilterState, issues one request per
//! interaction and renders the latest issued response into the table.
//!
//! Every issued request carries a generation number. A completion is only
//! rendered when its generation is still the newest one issued, so the table
//! always shows the answer to the last request the user caused, whatever
//! order responses arrive in. Nothing is cancelled; stale answers are dropped.

use crate::api::{EventSource, FetchError};
use crate::filter_state::{FilterState, ToggleEmphasis};
use crate::models::{EventListResponse, TimeFilter};
use crate::render::{self, DateFormatter, TableRow};
use crate::request::EventListRequest;
use std::cell::{Cell, RefCell};

/// Handle to the table body. Every call is a full replace.
pub trait TableView {
    fn replace_rows(&self, rows: Vec<TableRow>);
}

/// Handle to the two filter toggle controls.
pub trait FilterToggles {
    fn set_emphasis(&self, emphasis: ToggleEmphasis);
}

/// A request that has been issued but not yet answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRefresh {
    generation: u64,
    request: EventListRequest,
}

impl PendingRefresh {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &EventListRequest {
        &self.request
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Table replaced with this many event rows (0 = placeholder row).
    Rendered { events: usize },
    /// Table replaced with the error row.
    Failed,
    /// A newer request was issued meanwhile; table untouched.
    Stale,
}

pub struct EventListController<S, T, G> {
    source: S,
    table: T,
    toggles: G,
    page_url: String,
    dates: Cell<DateFormatter>,
    state: RefCell<FilterState>,
    issued: Cell<u64>,
}

impl<S, T, G> EventListController<S, T, G>
where
    S: EventSource,
    T: TableView,
    G: FilterToggles,
{
    pub fn new(source: S, table: T, toggles: G, page_url: impl Into<String>, dates: DateFormatter) -> Self {
        Self {
            source,
            table,
            toggles,
            page_url: page_url.into(),
            dates: Cell::new(dates),
            state: RefCell::new(FilterState::default()),
            issued: Cell::new(0),
        }
    }

    pub fn filter_state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    pub fn latest_generation(&self) -> u64 {
        self.issued.get()
    }

    pub fn dates(&self) -> DateFormatter {
        self.dates.get()
    }

    /// Swaps the date layout used for rows rendered from now on. The page
    /// learns the viewer's locale asynchronously, so this can land while the
    /// first request is still in flight.
    pub fn set_dates(&self, dates: DateFormatter) {
        self.dates.set(dates);
    }

    /// Sets the filter, re-emphasises the toggles and issues a refresh,
    /// even when `filter` is already selected.
    pub fn select_filter(&self, filter: TimeFilter) -> PendingRefresh {
        self.state.borrow_mut().select_filter(filter);
        self.toggles.set_emphasis(ToggleEmphasis::for_selected(filter));
        self.refresh()
    }

    /// Called on every input change; no debounce.
    pub fn update_search_text(&self, text: impl Into<String>) -> PendingRefresh {
        self.state.borrow_mut().update_search_text(text);
        self.refresh()
    }

    /// Snapshots the current state and issues the next generation.
    /// Drive the result with [`Self::complete`].
    pub fn refresh(&self) -> PendingRefresh {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        let request = EventListRequest::new(&self.page_url, &self.state.borrow());
        log::debug!("event list: issue gen={} {}", generation, request.url());
        PendingRefresh { generation, request }
    }

    /// Sends the request and renders the answer if it is still current.
    pub async fn complete(&self, pending: PendingRefresh) -> RefreshOutcome {
        let result = self.source.fetch(&pending.request).await;
        self.apply(pending.generation, result)
    }

    /// Renders a finished fetch. Exposed so callers that fetch elsewhere can
    /// feed results back in.
    pub fn apply(
        &self,
        generation: u64,
        result: Result<EventListResponse, FetchError>,
    ) -> RefreshOutcome {
        let latest = self.issued.get();
        if generation != latest {
            log::debug!("event list: drop gen={} (latest={})", generation, latest);
            return RefreshOutcome::Stale;
        }
        match result {
            Ok(response) => {
                let events = response.events.len();
                self.table
                    .replace_rows(render::render_events(&response.events, &self.dates.get()));
                RefreshOutcome::Rendered { events }
            }
            Err(e) => {
                log::warn!("event list: gen={} failed: {}", generation, e);
                self.table.replace_rows(render::render_failure());
                RefreshOutcome::Failed
            }
        }
    }
}
