//! Dental Core Library
//!
//! Offline record keeping for a single dental practice: patients,
//! appointments and treatments kept as JSON documents on local disk.
//!
//! # Architecture
//!
//! ```text
//!         UI action (mobile shell / CLI)
//!                      │
//!                      ▼
//!        ┌───────────────────────────┐
//!        │  DataStore::create_*      │  validate required fields
//!        │                           │  resolve patient, copy name
//!        └─────────────┬─────────────┘
//!                      │ load → insert → save
//!                      ▼
//!        data/patients.json  appointments.json  treatments.json
//!                      │
//!                      ▼
//!        views: schedule order / newest-first history
//! ```
//!
//! # Core Principle
//!
//! **Records are write-once.** A create either persists exactly one new record
//! or is rejected with a reason and persists nothing.
//!
//! # Modules
//!
//! - [`store`]: JSON document store, repositories, ID allocation, views
//! - [`models`]: Domain types (Patient, Appointment, Treatment, DentalChart)
//! - [`dashboard`]: Home screen counts
//! - [`config`]: Data directory configuration

pub mod config;
pub mod dashboard;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use dashboard::DashboardStats;
pub use models::{
    Appointment, AppointmentStatus, Collection, DentalChart, NewAppointment, NewPatient,
    NewTreatment, Patient, Tooth, Treatment,
};
pub use store::{DataStore, Rejection, StoreError, StoreResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DentalError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<StoreError> for DentalError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Rejected(Rejection::MissingField { field }) => {
                DentalError::MissingField(field.to_string())
            }
            StoreError::Rejected(Rejection::PatientNotFound { patient_id }) => {
                DentalError::PatientNotFound(patient_id)
            }
            StoreError::Config(e) => DentalError::ConfigError(e.to_string()),
            other => DentalError::StorageError(other.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for DentalError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DentalError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a data directory at the given path.
#[uniffi::export]
pub fn open_store(data_dir: String) -> Result<Arc<DentalCore>, DentalError> {
    let store = DataStore::open_dir(&data_dir)?;
    Ok(DentalCore::wrap(store))
}

/// Open the data directory named by a TOML config file.
#[uniffi::export]
pub fn open_store_from_config(config_path: String) -> Result<Arc<DentalCore>, DentalError> {
    let config = StoreConfig::load(Path::new(&config_path))?;
    let store = DataStore::open(&config)?;
    Ok(DentalCore::wrap(store))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
///
/// Each call holds the lock across its whole load-modify-save cycle.
#[derive(uniffi::Object)]
pub struct DentalCore {
    store: Arc<Mutex<DataStore>>,
}

impl DentalCore {
    fn wrap(store: DataStore) -> Arc<Self> {
        Arc::new(Self {
            store: Arc::new(Mutex::new(store)),
        })
    }
}

#[uniffi::export]
impl DentalCore {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a patient; returns the new patient ID.
    pub fn create_patient(
        &self,
        name: String,
        phone: String,
        email: String,
        dob: String,
    ) -> Result<String, DentalError> {
        let store = self.store.lock()?;
        let id = store.create_patient(NewPatient {
            name,
            phone,
            email,
            dob,
        })?;
        Ok(id)
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, patient_id: String) -> Result<Option<FfiPatient>, DentalError> {
        let store = self.store.lock()?;
        let patient = store.get_patient(&patient_id);
        Ok(patient.map(|p| FfiPatient::from_record(patient_id, p)))
    }

    /// List all patients in ID order.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, DentalError> {
        let store = self.store.lock()?;
        Ok(store
            .list_patients()
            .into_iter()
            .map(|(id, p)| FfiPatient::from_record(id, p))
            .collect())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Schedule an appointment; returns the new appointment ID.
    pub fn create_appointment(
        &self,
        patient_id: String,
        date: String,
        time: String,
        reason: String,
    ) -> Result<String, DentalError> {
        let store = self.store.lock()?;
        let id = store.create_appointment(NewAppointment {
            patient_id,
            date,
            time,
            reason,
        })?;
        Ok(id)
    }

    /// Appointments in schedule order.
    pub fn list_appointments(&self) -> Result<Vec<FfiAppointment>, DentalError> {
        let store = self.store.lock()?;
        Ok(store
            .list_appointments_sorted()
            .into_iter()
            .map(|(id, a)| FfiAppointment::from_record(id, a))
            .collect())
    }

    // =========================================================================
    // Treatment Operations
    // =========================================================================

    /// Record a treatment; returns the new treatment ID.
    pub fn create_treatment(
        &self,
        patient_id: String,
        procedure: String,
        date: String,
        cost: String,
        notes: String,
    ) -> Result<String, DentalError> {
        let store = self.store.lock()?;
        let id = store.create_treatment(NewTreatment {
            patient_id,
            procedure,
            date,
            cost,
            notes,
        })?;
        Ok(id)
    }

    /// Treatments, most recent first.
    pub fn list_treatments(&self) -> Result<Vec<FfiTreatment>, DentalError> {
        let store = self.store.lock()?;
        Ok(store
            .list_treatments_sorted()
            .into_iter()
            .map(|(id, t)| FfiTreatment::from_record(id, t))
            .collect())
    }

    // =========================================================================
    // Dashboard & Chart
    // =========================================================================

    /// Patient total and today's appointment count.
    pub fn dashboard(&self) -> Result<FfiDashboard, DentalError> {
        let store = self.store.lock()?;
        Ok(store.dashboard().into())
    }

    /// All 32 teeth, upper arch first.
    pub fn dental_chart(&self) -> Vec<FfiTooth> {
        DentalChart::standard()
            .teeth()
            .iter()
            .map(FfiTooth::from)
            .collect()
    }

    /// Detail for one tooth by universal number.
    pub fn tooth_info(&self, number: u8) -> Option<FfiTooth> {
        DentalChart::standard().tooth(number).map(FfiTooth::from)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub created_at: String,
}

impl FfiPatient {
    fn from_record(id: String, patient: Patient) -> Self {
        Self {
            id,
            name: patient.name,
            phone: patient.phone,
            email: patient.email,
            dob: patient.dob,
            created_at: patient.created_at,
        }
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub reason: Option<String>,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
}

impl FfiAppointment {
    fn from_record(id: String, apt: Appointment) -> Self {
        Self {
            id,
            status_label: apt.status.label(),
            status: apt.status.to_string(),
            patient_id: apt.patient_id,
            patient_name: apt.patient_name,
            date: apt.date,
            time: apt.time,
            reason: apt.reason,
            created_at: apt.created_at,
        }
    }
}

/// FFI-safe treatment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTreatment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub procedure: String,
    pub date: String,
    pub cost: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl FfiTreatment {
    fn from_record(id: String, treatment: Treatment) -> Self {
        Self {
            id,
            patient_id: treatment.patient_id,
            patient_name: treatment.patient_name,
            procedure: treatment.procedure,
            date: treatment.date,
            cost: treatment.cost,
            notes: treatment.notes,
            created_at: treatment.created_at,
        }
    }
}

/// FFI-safe dashboard counts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboard {
    pub total_patients: u32,
    pub todays_appointments: u32,
}

/// Counts past `u32::MAX` are clamped rather than wrapped.
impl From<DashboardStats> for FfiDashboard {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_patients: u32::try_from(stats.total_patients).unwrap_or(u32::MAX),
            todays_appointments: u32::try_from(stats.todays_appointments).unwrap_or(u32::MAX),
        }
    }
}

/// FFI-safe tooth detail.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTooth {
    pub number: u8,
    pub arch: String,
    pub condition: String,
    pub last_check: Option<String>,
}

impl From<&Tooth> for FfiTooth {
    fn from(tooth: &Tooth) -> Self {
        Self {
            number: tooth.number,
            arch: tooth.arch.label().to_string(),
            condition: tooth.condition.label().to_string(),
            last_check: tooth.last_check.clone(),
        }
    }
}
