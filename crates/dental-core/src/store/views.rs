//! Display orderings. These borrow a loaded collection and never modify it.

use crate::models::{Appointment, Collection, Treatment};

/// Appointments ordered by date, then time, ascending.
///
/// The sort is stable; equal slots keep ID order. Missing dates or times are
/// empty strings and so come first.
pub fn appointment_schedule(appointments: &Collection<Appointment>) -> Vec<(&str, &Appointment)> {
    let mut entries: Vec<_> = appointments
        .iter()
        .map(|(id, apt)| (id.as_str(), apt))
        .collect();
    entries.sort_by(|(_, a), (_, b)| {
        (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str()))
    });
    entries
}

/// Treatments ordered by date, most recent first.
///
/// The sort is stable; equal dates keep ID order. Missing dates sort last.
pub fn treatment_history(treatments: &Collection<Treatment>) -> Vec<(&str, &Treatment)> {
    let mut entries: Vec<_> = treatments
        .iter()
        .map(|(id, treatment)| (id.as_str(), treatment))
        .collect();
    entries.sort_by(|(_, a), (_, b)| b.date.cmp(&a.date));
    entries
}

/// Appointments falling on `date` (`YYYY-MM-DD`).
pub fn appointments_on<'a>(
    appointments: &'a Collection<Appointment>,
    date: &str,
) -> impl Iterator<Item = (&'a str, &'a Appointment)> + 'a {
    let date = date.to_string();
    appointments
        .iter()
        .filter(move |(_, apt)| apt.date == date)
        .map(|(id, apt)| (id.as_str(), apt))
}
