//! Shared types: events, registrations, request/response shapes.

pub mod admin;
pub mod event;
pub mod ids;
pub mod registration;

pub use admin::{AdminEvent, AdminEventQuery, AdminRegistration, AdminRegistrationQuery, NewEventRequest};
pub use event::{EventDetail, EventListQuery, EventListResponse, EventRecord, EventSummary, NewEvent, TimeFilter};
pub use ids::EventId;
pub use registration::{Registration, RegistrationForm};
