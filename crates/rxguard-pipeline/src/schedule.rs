//! Time-of-day grouping of verified medications.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use rxguard_contracts::prescription::VerifiedEntry;

static MORNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:morning|am|once daily)\b").expect("valid regex"));
static AFTERNOON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:afternoon|midday|noon)\b").expect("valid regex"));
static NIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:night|bedtime|pm|evening)\b").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Morning,
    Afternoon,
    Night,
}

/// One line of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDose {
    pub name: String,
    pub dose: String,
}

/// Verified medications grouped by time of day, each slot in verified order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub morning: Vec<ScheduledDose>,
    pub afternoon: Vec<ScheduledDose>,
    pub night: Vec<ScheduledDose>,
}

impl Schedule {
    /// Place every entry by the hints in its name and dose text.
    pub fn from_verified(verified: &[VerifiedEntry]) -> Self {
        let mut schedule = Self::default();
        for entry in verified {
            let dose = ScheduledDose {
                name: entry.display_name().to_string(),
                dose: entry.dose_text.clone(),
            };
            let hint = format!("{} {}", dose.name, dose.dose);
            schedule.slot_mut(classify(&hint)).push(dose);
        }
        schedule
    }

    pub fn slot(&self, slot: Slot) -> &[ScheduledDose] {
        match slot {
            Slot::Morning => &self.morning,
            Slot::Afternoon => &self.afternoon,
            Slot::Night => &self.night,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Vec<ScheduledDose> {
        match slot {
            Slot::Morning => &mut self.morning,
            Slot::Afternoon => &mut self.afternoon,
            Slot::Night => &mut self.night,
        }
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.night.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First matching slot, checked morning, afternoon, night. No hint: morning.
pub fn classify(text: &str) -> Slot {
    if MORNING.is_match(text) {
        Slot::Morning
    } else if AFTERNOON.is_match(text) {
        Slot::Afternoon
    } else if NIGHT.is_match(text) {
        Slot::Night
    } else {
        Slot::Morning
    }
}
