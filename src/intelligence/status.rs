//! Per-vital qualitative status and population comparison.
//!
//! Pure band tables; every input maps to exactly one status.

use serde::{Deserialize, Serialize};

use crate::models::{Gender, VitalKind, VitalSigns, VitalStatus};

/// Display hint accompanying a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHint {
    Green,
    Orange,
    Red,
    DarkRed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalStatusReport {
    pub vital: VitalKind,
    pub value: f64,
    pub unit: &'static str,
    pub status: VitalStatus,
    pub color_hint: ColorHint,
    pub comparison: PopulationComparison,
}

/// Classify a single vital reading against its fixed bands.
pub fn classify_vital(kind: VitalKind, value: f64) -> (VitalStatus, ColorHint) {
    use VitalStatus::*;

    match kind {
        VitalKind::HeartRate => {
            if (60.0..=100.0).contains(&value) {
                (Normal, ColorHint::Green)
            } else if value < 40.0 || value > 150.0 {
                (Critical, ColorHint::DarkRed)
            } else if value > 100.0 {
                (High, ColorHint::Red)
            } else {
                (Low, ColorHint::Red)
            }
        }
        VitalKind::Spo2 => {
            if value >= 95.0 {
                (Normal, ColorHint::Green)
            } else if value < 85.0 {
                (Critical, ColorHint::DarkRed)
            } else {
                (Low, ColorHint::Red)
            }
        }
        VitalKind::SystolicBp => {
            if (100.0..=120.0).contains(&value) {
                (Normal, ColorHint::Green)
            } else if value > 180.0 {
                (Critical, ColorHint::DarkRed)
            } else if value > 120.0 {
                (High, ColorHint::Orange)
            } else {
                (Low, ColorHint::Orange)
            }
        }
        VitalKind::DiastolicBp => {
            if (60.0..=80.0).contains(&value) {
                (Normal, ColorHint::Green)
            } else if value > 110.0 {
                (Critical, ColorHint::DarkRed)
            } else if value > 80.0 {
                (High, ColorHint::Orange)
            } else {
                (Low, ColorHint::Orange)
            }
        }
        VitalKind::Temperature => {
            if (36.5..=37.2).contains(&value) {
                (Normal, ColorHint::Green)
            } else if value > 39.0 || value < 35.0 {
                (Critical, ColorHint::DarkRed)
            } else {
                (Abnormal, ColorHint::Red)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Population comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonStatus {
    Similar,
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationComparison {
    pub average: f64,
    /// Percent difference from the average, one decimal.
    pub difference_percent: f64,
    pub status: ComparisonStatus,
    /// Reference normal range, for display.
    pub normal_range: &'static str,
}

/// (male average, female average, normal range)
fn population_average(kind: VitalKind) -> (f64, f64, &'static str) {
    match kind {
        VitalKind::HeartRate => (72.0, 76.0, "60-100"),
        VitalKind::Spo2 => (97.0, 97.0, "95-100"),
        VitalKind::SystolicBp => (120.0, 118.0, "100-120"),
        VitalKind::DiastolicBp => (80.0, 78.0, "60-80"),
        VitalKind::Temperature => (36.8, 36.9, "36.5-37.2"),
    }
}

/// Compare a value with the population average for the given gender.
/// `Gender::Other` uses the mean of the male and female averages.
pub fn compare_to_population(kind: VitalKind, value: f64, gender: Gender) -> PopulationComparison {
    let (male, female, normal_range) = population_average(kind);
    let average = match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Other => (male + female) / 2.0,
    };

    let difference_percent = round_one_decimal((value - average) / average * 100.0);
    let status = if difference_percent.abs() < 10.0 {
        ComparisonStatus::Similar
    } else if value > average {
        ComparisonStatus::Above
    } else {
        ComparisonStatus::Below
    };

    PopulationComparison {
        average,
        difference_percent,
        status,
        normal_range,
    }
}

fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Status report for all five vitals, in display order.
pub fn vital_status_report(vitals: &VitalSigns, gender: Gender) -> Vec<VitalStatusReport> {
    VitalKind::ALL
        .iter()
        .map(|&kind| {
            let value = vitals.value_of(kind);
            let (status, color_hint) = classify_vital(kind, value);
            VitalStatusReport {
                vital: kind,
                value,
                unit: kind.unit(),
                status,
                color_hint,
                comparison: compare_to_population(kind, value, gender),
            }
        })
        .collect()
}
