pub mod outbox;
pub mod repository;
pub mod seed_data;

pub use outbox::{EmailMessage, Outbox};
pub use repository::EventRepository;
