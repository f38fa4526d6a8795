//! In-memory event and registration store shared by all handlers.

use crate::error::ApiError;
use crate::models::{
    AdminEvent, AdminRegistration, EventId, EventRecord, EventSummary, NewEvent, Registration,
    TimeFilter,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    next_id: EventId,
    events: BTreeMap<EventId, EventRecord>,
    registrations: Vec<Registration>,
}

impl Store {
    fn registration_count(&self, event_id: EventId) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .count()
    }

    fn is_registered(&self, event_id: EventId, email: &str) -> bool {
        self.registrations
            .iter()
            .any(|r| r.event_id == event_id && r.email == email)
    }
}

#[derive(Clone, Default)]
pub struct EventRepository {
    inner: Arc<RwLock<Store>>,
}

impl EventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_event(&self, new: NewEvent) -> EventRecord {
        let mut store = self.inner.write().await;
        store.next_id += 1;
        let record = EventRecord {
            id: store.next_id,
            title: new.title,
            description: new.description,
            date: new.date,
        };
        store.events.insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, id: EventId) -> Option<EventRecord> {
        self.inner.read().await.events.get(&id).cloned()
    }

    pub async fn event_count(&self) -> usize {
        self.inner.read().await.events.len()
    }

    /// Past events newest first, upcoming soonest first; `search` is a
    /// case-insensitive title substring (empty = all).
    pub async fn list(
        &self,
        filter: TimeFilter,
        search: &str,
        now: DateTime<Utc>,
    ) -> Vec<EventSummary> {
        let store = self.inner.read().await;
        let needle = search.to_lowercase();
        let mut matched: Vec<&EventRecord> = store
            .events
            .values()
            .filter(|e| match filter {
                TimeFilter::Past => e.date < now,
                TimeFilter::Upcoming => e.date >= now,
            })
            .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
            .collect();
        match filter {
            TimeFilter::Past => matched.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id))),
            TimeFilter::Upcoming => matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id))),
        }
        matched
            .into_iter()
            .map(|e| EventSummary {
                id: e.id,
                title: e.title.clone(),
                date: e.date,
                registration_count: store.registration_count(e.id),
            })
            .collect()
    }

    /// Every event, newest date first. `search` matches the title or the
    /// `YYYY-MM-DD` date, case-insensitively.
    pub async fn all_events(&self, search: &str) -> Vec<AdminEvent> {
        let store = self.inner.read().await;
        let needle = search.to_lowercase();
        let mut matched: Vec<&EventRecord> = store
            .events
            .values()
            .filter(|e| {
                needle.is_empty()
                    || e.title.to_lowercase().contains(&needle)
                    || e.date.format("%Y-%m-%d").to_string().contains(&needle)
            })
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        matched
            .into_iter()
            .map(|e| AdminEvent::new(e, store.registration_count(e.id)))
            .collect()
    }

    /// Registrations in the order they were made, optionally for one event.
    /// `search` matches the email or the event title, case-insensitively.
    pub async fn registrations(&self, event: Option<EventId>, search: &str) -> Vec<AdminRegistration> {
        let store = self.inner.read().await;
        let needle = search.to_lowercase();
        store
            .registrations
            .iter()
            .filter(|r| event.map_or(true, |id| r.event_id == id))
            .filter_map(|r| {
                let title = store.events.get(&r.event_id).map(|e| e.title.as_str())?;
                let hit = needle.is_empty()
                    || r.email.to_lowercase().contains(&needle)
                    || title.to_lowercase().contains(&needle);
                hit.then(|| AdminRegistration::new(r, title))
            })
            .collect()
    }

    pub async fn registration_count(&self, event_id: EventId) -> usize {
        self.inner.read().await.registration_count(event_id)
    }

    pub async fn is_registered(&self, event_id: EventId, email: &str) -> bool {
        self.inner.read().await.is_registered(event_id, email)
    }

    /// Stores a registration. The (event, email) pair is unique; a second
    /// insert of the same pair is a validation error.
    pub async fn add_registration(&self, registration: Registration) -> Result<Registration, ApiError> {
        let mut store = self.inner.write().await;
        if !store.events.contains_key(&registration.event_id) {
            return Err(ApiError::NotFound(format!("event {}", registration.event_id)));
        }
        if store.is_registered(registration.event_id, &registration.email) {
            let mut errors = crate::error::FieldErrors::new();
            errors
                .entry("email")
                .or_default()
                .push(crate::models::registration::DUPLICATE_EMAIL.to_string());
            return Err(ApiError::Validation(errors));
        }
        store.registrations.push(registration.clone());
        Ok(registration)
    }
}
