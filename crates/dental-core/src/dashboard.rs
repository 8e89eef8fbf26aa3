//! Dashboard summary.

use serde::{Deserialize, Serialize};

use crate::models::{local_today, Appointment, Patient};
use crate::store::{appointments_on, DataStore};

/// Counts shown on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub todays_appointments: usize,
}

impl DataStore {
    /// Dashboard counts for the current local date.
    pub fn dashboard(&self) -> DashboardStats {
        self.dashboard_for(&local_today())
    }

    /// Dashboard counts with `today` given as `YYYY-MM-DD`.
    pub fn dashboard_for(&self, today: &str) -> DashboardStats {
        let patients = self.load::<Patient>();
        let appointments = self.load::<Appointment>();

        DashboardStats {
            total_patients: patients.len(),
            todays_appointments: appointments_on(&appointments, today).count(),
        }
    }
}
