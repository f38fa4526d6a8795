//! Staff-facing shapes: create events, browse events and registrations.

use super::event::{EventRecord, NewEvent};
use super::ids::EventId;
use super::registration::{Registration, REQUIRED};
use crate::error::FieldErrors;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const TITLE_MAX_LEN: usize = 200;

pub const INVALID_DATE: &str = "Enter a valid date/time.";

#[derive(Debug, Default, Deserialize)]
pub struct AdminEventQuery {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminRegistrationQuery {
    /// Only registrations for this event.
    pub event: Option<EventId>,
    /// Substring of the email or the event title.
    pub search: Option<String>,
}

/// Trimmed search text from an optional query value.
pub fn search_text(raw: &Option<String>) -> &str {
    raw.as_deref().unwrap_or("").trim()
}

#[derive(Debug, Default, Deserialize)]
pub struct NewEventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

impl NewEventRequest {
    pub fn validate(&self) -> Result<NewEvent, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = self.title.trim();
        if title.is_empty() {
            errors.entry("title").or_default().push(REQUIRED.to_string());
        } else if title.chars().count() > TITLE_MAX_LEN {
            errors.entry("title").or_default().push(format!(
                "Ensure this value has at most {} characters (it has {}).",
                TITLE_MAX_LEN,
                title.chars().count()
            ));
        }

        let date = self.date.trim();
        let parsed = if date.is_empty() {
            errors.entry("date").or_default().push(REQUIRED.to_string());
            None
        } else {
            let parsed = parse_event_date(date);
            if parsed.is_none() {
                errors.entry("date").or_default().push(INVALID_DATE.to_string());
            }
            parsed
        };

        match parsed {
            Some(date) if errors.is_empty() => {
                Ok(NewEvent::new(title, date).with_description(self.description.trim()))
            }
            _ => Err(errors),
        }
    }
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` taken as UTC.
fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub registration_count: usize,
}

impl AdminEvent {
    pub fn new(event: &EventRecord, registration_count: usize) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            registration_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminRegistration {
    pub event_id: EventId,
    pub event_title: String,
    pub name: String,
    pub email: String,
}

impl AdminRegistration {
    pub fn new(registration: &Registration, event_title: &str) -> Self {
        Self {
            event_id: registration.event_id,
            event_title: event_title.to_string(),
            name: registration.name.clone(),
            email: registration.email.clone(),
        }
    }
}
