//! Appointment store operations.

use tracing::info;

use super::{appointment_schedule, require, DataStore, StoreResult};
use crate::models::{Appointment, Collection, NewAppointment};

impl DataStore {
    /// All appointments, keyed by ID.
    pub fn list_appointments(&self) -> Collection<Appointment> {
        self.load()
    }

    /// Appointments in schedule order (date, then time).
    pub fn list_appointments_sorted(&self) -> Vec<(String, Appointment)> {
        let appointments = self.list_appointments();
        appointment_schedule(&appointments)
            .into_iter()
            .map(|(id, apt)| (id.to_string(), apt.clone()))
            .collect()
    }

    /// Get an appointment by ID.
    pub fn get_appointment(&self, appointment_id: &str) -> Option<Appointment> {
        self.load::<Appointment>().remove(appointment_id)
    }

    /// Schedule an appointment for an existing patient and return its ID.
    ///
    /// The appointment starts out `pending` and carries the patient's name as
    /// of now.
    pub fn create_appointment(&self, input: NewAppointment) -> StoreResult<String> {
        require("patient_id", &input.patient_id)?;
        require("date", &input.date)?;
        require("time", &input.time)?;

        let patient = self.resolve_patient(&input.patient_id)?;

        let mut appointments = self.load_document::<Appointment>();
        let appointment_id = appointments.next_id()?;
        let appointment = Appointment::new(
            patient.patient_id,
            patient.patient_name,
            input.date,
            input.time,
        )
        .with_reason(input.reason);

        appointments.records.insert(appointment_id.clone(), appointment);
        self.save_document(&appointments)?;

        info!(%appointment_id, patient_id = %input.patient_id, "appointment scheduled");
        Ok(appointment_id)
    }
}
