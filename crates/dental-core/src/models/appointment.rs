//! Appointment models.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{empty_as_none, lenient_string, local_timestamp, non_empty, or_not_available};

/// Appointment status. Anything other than the two known values is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Other(s) => s,
        }
    }

    /// Display label with the first letter capitalized.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, AppointmentStatus::Confirmed)
    }
}

impl From<String> for AppointmentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "" | "pending" => AppointmentStatus::Pending,
            "confirmed" => AppointmentStatus::Confirmed,
            _ => AppointmentStatus::Other(s),
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Status field decoder: lenient text, then [`AppointmentStatus::from`].
fn lenient_status<'de, D>(deserializer: D) -> Result<AppointmentStatus, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(AppointmentStatus::from)
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Patient ID this appointment is for
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: String,
    /// Patient name as it was when the appointment was booked
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: String,
    /// Date, YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Time, HH:MM
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    /// Reason for the visit
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: AppointmentStatus,
    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl Appointment {
    /// Create a pending appointment stamped with the current local time.
    pub fn new(patient_id: String, patient_name: String, date: String, time: String) -> Self {
        Self {
            patient_id,
            patient_name,
            date,
            time,
            reason: None,
            status: AppointmentStatus::Pending,
            created_at: local_timestamp(),
        }
    }

    /// Set the reason, ignoring blank input.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = non_empty(reason);
        self
    }

    pub fn reason_label(&self) -> &str {
        or_not_available(self.reason.as_deref())
    }
}

/// Input for scheduling an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}
