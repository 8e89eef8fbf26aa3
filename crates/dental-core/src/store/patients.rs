//! Patient store operations.

use tracing::info;

use super::{require, DataStore, StoreResult};
use crate::models::{Collection, NewPatient, Patient};

impl DataStore {
    /// All patients, keyed by ID.
    pub fn list_patients(&self) -> Collection<Patient> {
        self.load()
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, patient_id: &str) -> Option<Patient> {
        self.load::<Patient>().remove(patient_id)
    }

    /// Register a new patient and return its ID.
    ///
    /// Name and phone are required; email and date of birth may be blank.
    pub fn create_patient(&self, input: NewPatient) -> StoreResult<String> {
        require("name", &input.name)?;
        require("phone", &input.phone)?;

        let mut patients = self.load_document::<Patient>();
        let patient_id = patients.next_id()?;
        let patient = Patient::new(input.name, input.phone)
            .with_email(input.email)
            .with_dob(input.dob);

        patients.records.insert(patient_id.clone(), patient);
        self.save_document(&patients)?;

        info!(%patient_id, "patient created");
        Ok(patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CollectionKind, Rejection, StoreError};
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, DataStore) {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open_dir(dir.path()).unwrap();
        (dir, store)
    }

    fn alice() -> NewPatient {
        NewPatient {
            name: "Alice".into(),
            phone: "555-1000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, store) = setup_store();

        let id = store
            .create_patient(NewPatient {
                email: "alice@example.com".into(),
                dob: "1985-06-30".into(),
                ..alice()
            })
            .unwrap();
        assert_eq!(id, "P0001");

        let patient = store.get_patient(&id).unwrap();
        assert_eq!(patient.name, "Alice");
        assert_eq!(patient.phone, "555-1000");
        assert_eq!(patient.email.as_deref(), Some("alice@example.com"));
        assert_eq!(patient.dob.as_deref(), Some("1985-06-30"));
        assert_eq!(patient.created_at.len(), 19);
    }

    #[test]
    fn test_sequential_ids() {
        let (_dir, store) = setup_store();
        assert_eq!(store.create_patient(alice()).unwrap(), "P0001");
        assert_eq!(
            store
                .create_patient(NewPatient {
                    name: "Bob".into(),
                    phone: "555-2000".into(),
                    ..Default::default()
                })
                .unwrap(),
            "P0002"
        );
        assert_eq!(store.list_patients().len(), 2);
    }

    #[test]
    fn test_missing_name_rejected() {
        let (_dir, store) = setup_store();
        let err = store
            .create_patient(NewPatient {
                name: String::new(),
                ..alice()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(Rejection::MissingField { field: "name" })
        ));
        assert!(store.list_patients().is_empty());
        assert!(!store.path_for(CollectionKind::Patients).exists());
    }

    #[test]
    fn test_missing_phone_rejected() {
        let (_dir, store) = setup_store();
        store.create_patient(alice()).unwrap();

        let err = store
            .create_patient(NewPatient {
                name: "Bob".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::MissingField { field: "phone" }));
        assert_eq!(store.list_patients().len(), 1);
    }

    #[test]
    fn test_get_unknown_patient() {
        let (_dir, store) = setup_store();
        store.create_patient(alice()).unwrap();
        assert!(store.get_patient("P9999").is_none());
    }

    #[test]
    fn test_exhausted_ids_refuse_create() {
        let (_dir, store) = setup_store();
        let path = store.path_for(CollectionKind::Patients);
        let document = format!(r#"{{"P{}": {{"name": "Zed", "phone": "555-9999"}}}}"#, u64::MAX);
        std::fs::write(&path, &document).unwrap();

        let err = store.create_patient(alice()).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted(CollectionKind::Patients)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document);
    }
}
