pub mod admin;
pub mod events;
pub mod registration;

pub use events::{event_detail, event_list, not_found};
pub use registration::{confirmation, register};
