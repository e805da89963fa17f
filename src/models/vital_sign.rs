use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::enums::{Gender, VitalKind};

/// The five measured vitals of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Beats per minute.
    pub heart_rate: i32,
    /// Oxygen saturation, percent.
    pub spo2: i32,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    /// mmHg.
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: i32,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl VitalSigns {
    /// Value of a single vital as a float, for table-driven checks.
    pub fn value_of(&self, kind: VitalKind) -> f64 {
        match kind {
            VitalKind::HeartRate => f64::from(self.heart_rate),
            VitalKind::Spo2 => f64::from(self.spo2),
            VitalKind::SystolicBp => f64::from(self.systolic_bp),
            VitalKind::DiastolicBp => f64::from(self.diastolic_bp),
            VitalKind::Temperature => self.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: i32,
    pub gender: Gender,
}

/// Full input record for a vital-sign assessment.
///
/// Serialized flat: `{ heartRate, spo2, systolicBP, diastolicBP, temperature,
/// age, gender, symptoms, medicalHistory }`. Symptoms and history are sets;
/// duplicates collapse and insertion order is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    #[serde(flatten)]
    pub vitals: VitalSigns,
    #[serde(flatten)]
    pub demographics: Demographics,
    pub symptoms: BTreeSet<String>,
    pub medical_history: BTreeSet<String>,
}

impl VitalReading {
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    pub fn has_history(&self, condition: &str) -> bool {
        self.medical_history.contains(condition)
    }
}
