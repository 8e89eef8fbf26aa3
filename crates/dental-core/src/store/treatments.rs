//! Treatment record store operations.

use tracing::info;

use super::{require, treatment_history, DataStore, StoreResult};
use crate::models::{Collection, NewTreatment, Treatment};

impl DataStore {
    /// All treatments, keyed by ID.
    pub fn list_treatments(&self) -> Collection<Treatment> {
        self.load()
    }

    /// Treatments, most recent date first.
    pub fn list_treatments_sorted(&self) -> Vec<(String, Treatment)> {
        let treatments = self.list_treatments();
        treatment_history(&treatments)
            .into_iter()
            .map(|(id, treatment)| (id.to_string(), treatment.clone()))
            .collect()
    }

    /// Get a treatment by ID.
    pub fn get_treatment(&self, treatment_id: &str) -> Option<Treatment> {
        self.load::<Treatment>().remove(treatment_id)
    }

    /// Record a treatment for an existing patient and return its ID.
    pub fn create_treatment(&self, input: NewTreatment) -> StoreResult<String> {
        require("patient_id", &input.patient_id)?;
        require("procedure", &input.procedure)?;
        require("date", &input.date)?;
        require("cost", &input.cost)?;

        let patient = self.resolve_patient(&input.patient_id)?;

        let mut treatments = self.load_document::<Treatment>();
        let treatment_id = treatments.next_id()?;
        let treatment = Treatment::new(
            patient.patient_id,
            patient.patient_name,
            input.procedure,
            input.date,
            input.cost,
        )
        .with_notes(input.notes);

        treatments.records.insert(treatment_id.clone(), treatment);
        self.save_document(&treatments)?;

        info!(%treatment_id, patient_id = %input.patient_id, "treatment recorded");
        Ok(treatment_id)
    }
}
