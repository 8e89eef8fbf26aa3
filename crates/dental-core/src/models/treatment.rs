//! Treatment record models.

use serde::{Deserialize, Serialize};

use super::{empty_as_none, lenient_string, local_timestamp, non_empty, or_not_available};

/// A completed treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Treatment {
    /// Patient ID the treatment was performed on
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: String,
    /// Patient name as it was when the record was written
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: String,
    /// Procedure performed
    #[serde(default, deserialize_with = "lenient_string")]
    pub procedure: String,
    /// Date, YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Cost as entered; not interpreted numerically
    #[serde(default, deserialize_with = "lenient_string")]
    pub cost: String,
    /// Clinical notes
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl Treatment {
    /// Create a treatment record stamped with the current local time.
    pub fn new(
        patient_id: String,
        patient_name: String,
        procedure: String,
        date: String,
        cost: String,
    ) -> Self {
        Self {
            patient_id,
            patient_name,
            procedure,
            date,
            cost,
            notes: None,
            created_at: local_timestamp(),
        }
    }

    /// Set the notes, ignoring blank input.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_empty(notes);
        self
    }

    pub fn cost_label(&self) -> String {
        format!("${}", self.cost)
    }

    pub fn notes_label(&self) -> &str {
        or_not_available(self.notes.as_deref())
    }
}

/// Input for recording a treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTreatment {
    pub patient_id: String,
    pub procedure: String,
    pub date: String,
    pub cost: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let treatment = Treatment::new(
            "P0001".into(),
            "Alice".into(),
            "Filling".into(),
            "2024-03-02".into(),
            "120.00".into(),
        );
        assert_eq!(treatment.cost_label(), "$120.00");
        assert_eq!(treatment.notes_label(), "N/A");

        let treatment = treatment.with_notes("Upper left molar");
        assert_eq!(treatment.notes_label(), "Upper left molar");
    }

    #[test]
    fn test_cost_kept_as_text() {
        let json = r#"{"patient_id": "P0001", "procedure": "Crown", "date": "2024-03-02", "cost": "about 800"}"#;
        let treatment: Treatment = serde_json::from_str(json).unwrap();
        assert_eq!(treatment.cost, "about 800");
    }

    #[test]
    fn test_numeric_cost() {
        let json = r#"{"patient_id": "P0001", "procedure": "Cleaning", "cost": 150, "notes": null}"#;
        let treatment: Treatment = serde_json::from_str(json).unwrap();
        assert_eq!(treatment.cost_label(), "$150");
        assert_eq!(treatment.notes, None);
    }
}
