//! Patient models.

use serde::{Deserialize, Serialize};

use super::{empty_as_none, lenient_string, local_timestamp, non_empty, or_not_available};

/// A patient record. The ID is the key it is stored under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Full name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Contact phone number
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    /// Email address
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, free-form (entry hint is YYYY-MM-DD)
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl Patient {
    /// Create a new patient stamped with the current local time.
    pub fn new(name: String, phone: String) -> Self {
        Self {
            name,
            phone,
            email: None,
            dob: None,
            created_at: local_timestamp(),
        }
    }

    /// Set the email, ignoring blank input.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty(email);
        self
    }

    /// Set the date of birth, ignoring blank input.
    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = non_empty(dob);
        self
    }

    pub fn email_label(&self) -> &str {
        or_not_available(self.email.as_deref())
    }

    pub fn dob_label(&self) -> &str {
        or_not_available(self.dob.as_deref())
    }
}

/// Input for creating a patient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub dob: String,
}
