//! Plain-text rendering for terminal output.

use std::fmt::Write;

use dental_core::models::{Arch, DentalChart, Tooth};
use dental_core::{Appointment, DashboardStats, Patient, Treatment};

pub fn dashboard(stats: &DashboardStats) -> String {
    format!(
        "Dental Practice Manager\n\n  Total Patients:        {}\n  Today's Appointments:  {}\n",
        stats.total_patients, stats.todays_appointments
    )
}

pub fn patient_row(id: &str, patient: &Patient) -> String {
    format!("{id}  {}  Phone: {}", patient.name, patient.phone)
}

pub fn patient_detail(id: &str, patient: &Patient) -> String {
    format!(
        "ID: {id}\nName: {}\nPhone: {}\nEmail: {}\nDOB: {}\n",
        patient.name,
        patient.phone,
        patient.email_label(),
        patient.dob_label()
    )
}

pub fn appointment_row(id: &str, apt: &Appointment) -> String {
    format!(
        "{id}  {} {}  {}  [{}]",
        apt.date,
        apt.time,
        apt.patient_name,
        apt.status.label()
    )
}

pub fn treatment_row(id: &str, treatment: &Treatment) -> String {
    format!(
        "{id}  {} - {}\n  Date: {} | Cost: {}\n  Notes: {}",
        treatment.patient_name,
        treatment.procedure,
        treatment.date,
        treatment.cost_label(),
        treatment.notes_label()
    )
}

pub fn chart(chart: &DentalChart) -> String {
    let mut out = String::new();
    for (arch, teeth) in [(Arch::Upper, chart.upper()), (Arch::Lower, chart.lower())] {
        let numbers: Vec<String> = teeth.iter().map(|t| format!("{:>2}", t.number)).collect();
        let _ = writeln!(out, "{}", arch.label());
        let _ = writeln!(out, "  {}", numbers.join(" "));
    }
    out
}

pub fn tooth(tooth: &Tooth) -> String {
    format!(
        "Tooth #{}\nCondition: {}\nLast Check: {}\n",
        tooth.number,
        tooth.condition.label(),
        tooth.last_check_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_detail_fills_blanks() {
        let patient = Patient::new("Alice".into(), "555-1000".into());
        let text = patient_detail("P0001", &patient);
        assert!(text.contains("ID: P0001"));
        assert!(text.contains("Email: N/A"));
        assert!(text.contains("DOB: N/A"));
    }

    #[test]
    fn test_appointment_row() {
        let apt = Appointment::new("P0001".into(), "Alice".into(), "2024-01-15".into(), "09:00".into());
        assert_eq!(appointment_row("APT0001", &apt), "APT0001  2024-01-15 09:00  Alice  [Pending]");
    }

    #[test]
    fn test_treatment_row() {
        let treatment = Treatment::new(
            "P0001".into(),
            "Alice".into(),
            "Filling".into(),
            "2024-03-02".into(),
            "150".into(),
        );
        let text = treatment_row("T0001", &treatment);
        assert!(text.starts_with("T0001  Alice - Filling"));
        assert!(text.contains("Cost: $150"));
        assert!(text.ends_with("Notes: N/A"));
    }

    #[test]
    fn test_chart_lists_both_arches() {
        let text = chart(&DentalChart::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Upper Teeth");
        assert!(lines[1].trim_start().starts_with("1  2"));
        assert_eq!(lines[2], "Lower Teeth");
        assert!(lines[3].trim_end().ends_with("32"));
    }

    #[test]
    fn test_dashboard() {
        let text = dashboard(&DashboardStats {
            total_patients: 3,
            todays_appointments: 1,
        });
        assert!(text.contains("Total Patients:        3"));
        assert!(text.contains("Today's Appointments:  1"));
    }
}
