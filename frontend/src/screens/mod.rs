mod events;

pub use events::{EventTableRow, EventsScreen};
