//! First-match disease screening.
//!
//! The rules overlap (a reading can satisfy both the Asthma and the
//! Hypertension predicates) and the list order decides. The order below is
//! part of the public contract; do not reorder.

use crate::models::{Disease, DiseaseMatch, VitalSigns};

pub struct DiseaseRule {
    pub disease: Disease,
    pub confidence: f64,
    pub description: &'static str,
    pub matches: fn(&VitalSigns) -> bool,
}

pub const NORMAL_CONFIDENCE: f64 = 0.85;

pub static DISEASE_RULES: [DiseaseRule; 4] = [
    DiseaseRule {
        disease: Disease::Asthma,
        confidence: 0.92,
        description: "spo2 < 95 and heart rate > 80",
        matches: |v: &VitalSigns| v.spo2 < 95 && v.heart_rate > 80,
    },
    DiseaseRule {
        disease: Disease::Hypertension,
        confidence: 0.89,
        description: "systolic >= 140 or diastolic >= 90",
        matches: |v: &VitalSigns| v.systolic_bp >= 140 || v.diastolic_bp >= 90,
    },
    DiseaseRule {
        disease: Disease::Arrhythmia,
        confidence: 0.87,
        description: "heart rate < 50 or > 120",
        matches: |v: &VitalSigns| v.heart_rate < 50 || v.heart_rate > 120,
    },
    DiseaseRule {
        disease: Disease::DiabetesMellitus,
        confidence: 0.84,
        description: "temperature > 37.5 and systolic > 130",
        matches: |v: &VitalSigns| v.temperature > 37.5 && v.systolic_bp > 130,
    },
];

/// Return the first matching rule's label, or `Normal`.
pub fn classify_disease(vitals: &VitalSigns) -> DiseaseMatch {
    DISEASE_RULES
        .iter()
        .find(|rule| (rule.matches)(vitals))
        .inspect(|rule| {
            tracing::trace!(
                disease = %rule.disease,
                rule = rule.description,
                "Disease rule matched"
            )
        })
        .map(|rule| DiseaseMatch {
            disease: rule.disease,
            confidence: rule.confidence,
        })
        .unwrap_or(DiseaseMatch {
            disease: Disease::Normal,
            confidence: NORMAL_CONFIDENCE,
        })
}
