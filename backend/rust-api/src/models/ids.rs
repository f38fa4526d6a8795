//! Entity IDs. Events are numbered sequentially by the repository.

pub type EventId = u64;
