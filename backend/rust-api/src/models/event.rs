use super::ids::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl EventRecord {
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.date < now
    }
}

#[derive(Clone, Debug)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Which side of "now" the list shows. Anything but `past` means upcoming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFilter {
    #[default]
    Upcoming,
    Past,
}

impl TimeFilter {
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("past") => TimeFilter::Past,
            _ => TimeFilter::Upcoming,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "upcoming",
            TimeFilter::Past => "past",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl EventListQuery {
    pub fn time_filter(&self) -> TimeFilter {
        TimeFilter::from_query(self.filter.as_deref())
    }

    /// Trimmed search text; empty means no title filter.
    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or("").trim()
    }
}

/// One row of the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub registration_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub registration_count: usize,
    pub is_past: bool,
    /// The registration form is only offered for events that have not happened.
    pub registration_open: bool,
}

impl EventDetail {
    pub fn new(event: &EventRecord, registration_count: usize, now: DateTime<Utc>) -> Self {
        let is_past = event.is_past(now);
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            registration_count,
            is_past,
            registration_open: !is_past,
        }
    }
}
