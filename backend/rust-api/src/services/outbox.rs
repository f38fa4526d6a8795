//! Outgoing mail. Messages are logged and kept in memory; delivery never
//! fails the request that triggered it.

use crate::config::Config;
use crate::models::{EventRecord, Registration};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct Outbox {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver(&self, message: EmailMessage) {
        tracing::info!(to = %message.to, subject = %message.subject, "Confirmation email sent");
        match self.sent.lock() {
            Ok(mut sent) => sent.push(message),
            Err(e) => tracing::warn!("Failed to record email to {}: {}", message.to, e),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

pub fn confirmation_email(config: &Config, event: &EventRecord, registration: &Registration) -> EmailMessage {
    EmailMessage {
        from: config.default_from_email.clone(),
        to: registration.email.clone(),
        subject: "Event Registration Confirmation".to_string(),
        body: format!(
            "Thank you {} for registering for {}.",
            registration.name, event.title
        ),
    }
}
