use super::ids::EventId;
use crate::error::FieldErrors;
use serde::{Deserialize, Serialize};

const NAME_MAX_LEN: usize = 100;
const EMAIL_MAX_LEN: usize = 254;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const DUPLICATE_EMAIL: &str = "This email has already registered for this event.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
}

/// Submitted registration form. Missing fields arrive as empty strings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl RegistrationForm {
    /// Field-level checks. `already_registered` tells whether the cleaned
    /// email is taken for this event.
    pub fn validate(
        &self,
        event_id: EventId,
        already_registered: impl FnOnce(&str) -> bool,
    ) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() {
            errors.entry("name").or_default().push(REQUIRED.to_string());
        } else if name.chars().count() > NAME_MAX_LEN {
            errors.entry("name").or_default().push(format!(
                "Ensure this value has at most {} characters (it has {}).",
                NAME_MAX_LEN,
                name.chars().count()
            ));
        }

        if email.is_empty() {
            errors.entry("email").or_default().push(REQUIRED.to_string());
        } else if !is_valid_email(email) {
            errors.entry("email").or_default().push(INVALID_EMAIL.to_string());
        } else if already_registered(email) {
            errors.entry("email").or_default().push(DUPLICATE_EMAIL.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Registration {
            event_id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
