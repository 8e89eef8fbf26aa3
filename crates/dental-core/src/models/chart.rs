//! Dental chart using universal tooth numbering.

use serde::{Deserialize, Serialize};

use super::or_not_available;

/// Number of permanent teeth on the chart.
pub const TOOTH_COUNT: u8 = 32;

/// Highest tooth number on the upper arch.
const UPPER_LAST: u8 = 16;

/// Dental arch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Upper,
    Lower,
}

impl Arch {
    pub fn label(&self) -> &'static str {
        match self {
            Arch::Upper => "Upper Teeth",
            Arch::Lower => "Lower Teeth",
        }
    }
}

/// Recorded condition of a tooth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToothCondition {
    #[default]
    Healthy,
    Other(String),
}

impl ToothCondition {
    pub fn label(&self) -> &str {
        match self {
            ToothCondition::Healthy => "Healthy",
            ToothCondition::Other(s) => s,
        }
    }
}

/// A single tooth on the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tooth {
    /// Universal number, 1..=32
    pub number: u8,
    pub arch: Arch,
    pub condition: ToothCondition,
    /// Date of the last check, if any
    pub last_check: Option<String>,
}

impl Tooth {
    fn new(number: u8) -> Self {
        let arch = if number <= UPPER_LAST { Arch::Upper } else { Arch::Lower };
        Self {
            number,
            arch,
            condition: ToothCondition::Healthy,
            last_check: None,
        }
    }

    pub fn last_check_label(&self) -> &str {
        or_not_available(self.last_check.as_deref())
    }
}

/// Full-mouth chart, upper arch first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DentalChart {
    teeth: Vec<Tooth>,
}

impl DentalChart {
    /// Chart with all 32 teeth healthy and unchecked.
    pub fn standard() -> Self {
        Self {
            teeth: (1..=TOOTH_COUNT).map(Tooth::new).collect(),
        }
    }

    pub fn teeth(&self) -> &[Tooth] {
        &self.teeth
    }

    /// Teeth 1..=16.
    pub fn upper(&self) -> &[Tooth] {
        &self.teeth[..UPPER_LAST as usize]
    }

    /// Teeth 17..=32.
    pub fn lower(&self) -> &[Tooth] {
        &self.teeth[UPPER_LAST as usize..]
    }

    /// Look up a tooth by universal number.
    pub fn tooth(&self, number: u8) -> Option<&Tooth> {
        if number == 0 {
            return None;
        }
        self.teeth.get(number as usize - 1)
    }
}

impl Default for DentalChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chart() {
        let chart = DentalChart::standard();
        assert_eq!(chart.teeth().len(), 32);
        assert_eq!(chart.upper().len(), 16);
        assert_eq!(chart.lower().len(), 16);
        assert_eq!(chart.upper()[0].number, 1);
        assert_eq!(chart.lower()[0].number, 17);
        assert!(chart.upper().iter().all(|t| t.arch == Arch::Upper));
        assert!(chart.lower().iter().all(|t| t.arch == Arch::Lower));
    }

    #[test]
    fn test_tooth_lookup() {
        let chart = DentalChart::standard();
        assert!(chart.tooth(0).is_none());
        assert!(chart.tooth(33).is_none());

        let tooth = chart.tooth(19).unwrap();
        assert_eq!(tooth.number, 19);
        assert_eq!(tooth.arch, Arch::Lower);
        assert_eq!(tooth.condition.label(), "Healthy");
        assert_eq!(tooth.last_check_label(), "N/A");
    }
}
