//! Patient lookups for dependent records.

use super::{DataStore, Rejection, StoreResult};

/// A patient reference copied into an appointment or treatment.
///
/// The name is a snapshot; later edits to the patient are not propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRef {
    pub patient_id: String,
    pub patient_name: String,
}

impl DataStore {
    /// Resolve `patient_id` against the patients collection.
    pub fn resolve_patient(&self, patient_id: &str) -> StoreResult<PatientRef> {
        let patient = self
            .get_patient(patient_id)
            .ok_or_else(|| Rejection::PatientNotFound {
                patient_id: patient_id.to_string(),
            })?;

        Ok(PatientRef {
            patient_id: patient_id.to_string(),
            patient_name: patient.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPatient;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_patient() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open_dir(dir.path()).unwrap();
        let id = store
            .create_patient(NewPatient {
                name: "Alice".into(),
                phone: "555-1000".into(),
                ..Default::default()
            })
            .unwrap();

        let found = store.resolve_patient(&id).unwrap();
        assert_eq!(found.patient_id, "P0001");
        assert_eq!(found.patient_name, "Alice");

        let err = store.resolve_patient("P0002").unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::PatientNotFound {
                patient_id: "P0002".into()
            })
        );
    }
}
