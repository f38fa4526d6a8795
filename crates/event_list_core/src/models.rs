//! Wire models for the event list endpoint.
//! The server owns these; the client only reads and displays them.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Time window selected by the filter toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    #[default]
    Upcoming,
    Past,
}

impl TimeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "upcoming",
            TimeFilter::Past => "past",
        }
    }

    /// DOM id of the toggle control for this filter.
    pub fn toggle_id(&self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "upcoming_events",
            TimeFilter::Past => "past_events",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "Upcoming",
            TimeFilter::Past => "Past",
        }
    }

    pub const ALL: [TimeFilter; 2] = [TimeFilter::Upcoming, TimeFilter::Past];
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-assigned event identifier. Accepts a JSON number or string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId(pub String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        EventId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }
        Ok(match Raw::deserialize(de)? {
            Raw::Int(n) => EventId(n.to_string()),
            Raw::Text(s) => EventId(s),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// ISO-8601 as sent by the server; parsed only for display.
    pub date: String,
    pub registration_count: u32,
}

impl Event {
    pub fn detail_href(&self) -> String {
        format!("/event/{}/", self.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_accepts_number_and_string() {
        let a: Event = serde_json::from_str(
            r#"{"id":7,"title":"Launch","date":"2024-03-01T10:00:00Z","registration_count":12}"#,
        )
        .unwrap();
        let b: Event = serde_json::from_str(
            r#"{"id":"ab-1","title":"x","date":"2024-03-01","registration_count":0}"#,
        )
        .unwrap();
        assert_eq!(a.id, EventId::from(7));
        assert_eq!(a.detail_href(), "/event/7/");
        assert_eq!(b.detail_href(), "/event/ab-1/");
    }

    #[test]
    fn negative_registration_count_is_rejected() {
        let r: Result<Event, _> = serde_json::from_str(
            r#"{"id":1,"title":"x","date":"2024-03-01","registration_count":-1}"#,
        );
        assert!(r.is_err());
    }
}
