//! Encodes a FilterState into a request against the data endpoint.

use crate::filter_state::FilterState;
use crate::models::TimeFilter;

/// Header marking the request as programmatic (not a navigation).
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventListRequest {
    url: String,
    filter: TimeFilter,
    search: String,
}

impl EventListRequest {
    /// `page_url` is the page the list lives on; any query or fragment on it is replaced.
    pub fn new(page_url: &str, state: &FilterState) -> Self {
        let base = page_url.split(['?', '#']).next().unwrap_or_default();
        let url = format!(
            "{}?filter={}&search={}",
            base,
            state.filter.as_str(),
            urlencoding::encode(&state.search_text)
        );
        Self {
            url,
            filter: state.filter,
            search: state.search_text.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query portion, starting at `?`.
    pub fn query(&self) -> &str {
        self.url.find('?').map(|i| &self.url[i..]).unwrap_or("")
    }

    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    /// Search text as typed, before encoding.
    pub fn search(&self) -> &str {
        &self.search
    }
}
