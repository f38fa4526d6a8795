//! Client logic for the filterable event list: filter state, request
//! encoding, row rendering and the refresh cycle. No UI toolkit dependency;
//! the frontend plugs its table and toggles in through [`TableView`] and
//! [`FilterToggles`].

mod api;
mod config;
mod controller;
mod filter_state;
mod models;
mod render;
mod request;

pub use api::{EventSource, FetchError, HttpEventSource};
pub use config::ClientConfig;
pub use controller::{EventListController, FilterToggles, PendingRefresh, RefreshOutcome, TableView};
pub use filter_state::{Emphasis, FilterState, ToggleEmphasis};
pub use models::{Event, EventId, EventListResponse, TimeFilter};
pub use render::{
    event_row, render_events, render_failure, DateFormatter, DateStyle, EventRow, NoticeKind,
    TableRow, Zone, COLUMN_COUNT, EMPTY_TEXT, ERROR_TEXT, VIEW_LABEL,
};
pub use request::{EventListRequest, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
