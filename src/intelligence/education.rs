//! Disease symptom profiles and long-form patient education.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Demographics, Disease, Severity, VitalSigns};

use super::helpers::OrderedSet;
use super::reference::{
    DiagnosticCriterion, DiseaseExplanation, ReferenceData, TechnologyIntegration,
};
use super::scoring::OLDER_ADULT_AGE;
use super::types::AssessmentError;
use super::validation::{decode, validate_demographics, validate_vitals};

pub const PROFILE_GENERATED_BY: &str = "Offline Rule-Based Symptom Profile";
pub const EXPLANATION_GENERATED_BY: &str = "Offline Medical Education";
pub const EDUCATION_LEVEL: &str = "comprehensive";

/// Unknown labels fall back to `Normal`.
fn resolve_disease(label: &str) -> Disease {
    label.trim().parse().unwrap_or_else(|_| {
        tracing::debug!(label, "Unknown disease label, using Normal");
        Disease::Normal
    })
}

// ---------------------------------------------------------------------------
// Symptom profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomProfileRequest {
    pub disease: String,
    pub vitals: VitalSigns,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContext {
    pub pathophysiology: String,
    pub monitoring: Vec<String>,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSymptoms {
    pub disease: Disease,
    pub primary_symptoms: Vec<String>,
    pub secondary_symptoms: Vec<String>,
    pub explanation: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    pub educational: EducationalContext,
    pub generated_by: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Age bumps severity one step, capped at severe.
fn escalate(severity: Severity) -> Severity {
    match severity {
        Severity::Mild => Severity::Moderate,
        Severity::Moderate | Severity::Severe => Severity::Severe,
    }
}

pub fn generate_symptoms(
    disease: Disease,
    vitals: &VitalSigns,
    demographics: &Demographics,
    reference: &ReferenceData,
) -> GeneratedSymptoms {
    let entry = reference.disease(disease);
    let profile = &entry.profile;

    let mut primary = OrderedSet::default();
    primary.extend(profile.primary_symptoms.iter().map(String::as_str));
    let mut secondary = OrderedSet::default();
    secondary.extend(profile.secondary_symptoms.iter().map(String::as_str));
    let mut severity = profile.severity;

    if demographics.age > OLDER_ADULT_AGE {
        secondary.extend(["Confusion", "Weakness"]);
        severity = escalate(severity);
    }
    if vitals.heart_rate > 120 || vitals.heart_rate < 50 {
        primary.push("Palpitations");
    }
    if vitals.spo2 < 90 {
        primary.push("Shortness of Breath");
        severity = Severity::Severe;
    }
    if vitals.systolic_bp > 160 {
        primary.push("Headache");
    }
    if vitals.temperature > 38.0 {
        secondary.extend(["Fever", "Sweating"]);
    }

    GeneratedSymptoms {
        disease,
        primary_symptoms: primary.into_vec(),
        secondary_symptoms: secondary.into_vec(),
        explanation: profile.explanation.clone(),
        severity,
        recommendations: profile.recommendations.clone(),
        educational: EducationalContext {
            pathophysiology: entry.pathophysiology.clone(),
            monitoring: entry.monitoring.clone(),
            red_flags: entry.red_flags.clone(),
        },
        generated_by: PROFILE_GENERATED_BY,
        timestamp: Utc::now(),
    }
}

pub fn generate_symptoms_value(
    body: Value,
    reference: &ReferenceData,
) -> Result<GeneratedSymptoms, AssessmentError> {
    let request: SymptomProfileRequest = decode(body)?;
    validate_vitals(&request.vitals)?;
    validate_demographics(&request.demographics)?;
    Ok(generate_symptoms(
        resolve_disease(&request.disease),
        &request.vitals,
        &request.demographics,
        reference,
    ))
}

// ---------------------------------------------------------------------------
// Medical explanation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ExplanationRequest {
    pub disease: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub vitals: VitalSigns,
}

/// Coarser labels than `VitalStatus`, phrased for patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendStatus {
    Normal,
    Elevated,
    High,
    Low,
    Critical,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleVitalAnalysis<T> {
    pub value: T,
    pub status: TrendStatus,
    pub implications: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BloodPressureAnalysis {
    pub systolic: i32,
    pub diastolic: i32,
    pub status: TrendStatus,
    pub implications: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignAnalysis {
    pub heart_rate: SingleVitalAnalysis<i32>,
    pub blood_pressure: BloodPressureAnalysis,
    pub oxygen_saturation: SingleVitalAnalysis<i32>,
    pub temperature: SingleVitalAnalysis<f64>,
}

/// Titles of further reading, templated on the disease name.
#[derive(Debug, Clone, Serialize)]
pub struct EducationalResources {
    pub videos: Vec<String>,
    pub articles: Vec<String>,
    pub tools: Vec<String>,
    pub support: Vec<&'static str>,
}

pub fn educational_resources(disease: Disease) -> EducationalResources {
    EducationalResources {
        videos: vec![
            format!("Understanding {disease}"),
            format!("Managing {disease} symptoms"),
            format!("Technology for {disease}"),
        ],
        articles: vec![
            format!("{disease} pathophysiology"),
            format!("Latest treatments for {disease}"),
            format!("Living with {disease}"),
        ],
        tools: vec![
            format!("{disease} risk calculator"),
            "Symptom tracker".to_string(),
            "Medication adherence tool".to_string(),
        ],
        support: vec![
            "Patient support groups",
            "Educational webinars",
            "Healthcare provider network",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalExplanation {
    pub disease: Disease,
    #[serde(flatten)]
    pub explanation: DiseaseExplanation,
    pub personalized_insights: Vec<String>,
    pub diagnostic_criteria: Vec<DiagnosticCriterion>,
    pub prevention_strategies: Vec<String>,
    pub technology_integration: TechnologyIntegration,
    pub educational_resources: EducationalResources,
    pub current_symptoms: Vec<String>,
    pub vital_sign_analysis: VitalSignAnalysis,
    pub generated_by: &'static str,
    pub timestamp: DateTime<Utc>,
    pub education_level: &'static str,
}

pub fn personalized_insights(disease: Disease, vitals: &VitalSigns) -> Vec<String> {
    let mut insights = Vec::new();
    match disease {
        Disease::Hypertension => {
            if vitals.systolic_bp > 140 {
                insights.push(format!(
                    "Your systolic pressure of {} is elevated - focus on salt reduction and stress management",
                    vitals.systolic_bp
                ));
            }
            if vitals.heart_rate > 80 {
                insights.push(format!(
                    "Heart rate of {} suggests increased cardiovascular workload",
                    vitals.heart_rate
                ));
            }
        }
        Disease::Asthma => {
            if vitals.spo2 < 95 {
                insights.push(format!(
                    "Oxygen saturation of {}% indicates airway compromise - monitor closely",
                    vitals.spo2
                ));
            }
            if vitals.heart_rate > 100 {
                insights.push(
                    "Elevated heart rate may indicate respiratory distress - consider rescue medication"
                        .to_string(),
                );
            }
        }
        Disease::Arrhythmia => {
            if vitals.heart_rate > 120 {
                insights.push(format!(
                    "Heart rate of {} is significantly elevated - monitor for symptoms",
                    vitals.heart_rate
                ));
            }
            if vitals.heart_rate < 60 {
                insights.push(format!(
                    "Heart rate of {} is low - watch for dizziness or fatigue",
                    vitals.heart_rate
                ));
            }
        }
        Disease::DiabetesMellitus | Disease::Normal => {}
    }
    insights
}

fn heart_rate_implications(hr: i32, disease: Disease) -> String {
    match disease {
        Disease::Arrhythmia => {
            format!("Heart rate of {hr} may indicate rhythm disturbance requiring monitoring")
        }
        Disease::Hypertension if hr > 80 => {
            "Elevated heart rate suggests increased cardiovascular workload".to_string()
        }
        Disease::Asthma if hr > 100 => {
            "Tachycardia may indicate respiratory distress or medication effects".to_string()
        }
        _ => format!("Heart rate of {hr} bpm within expected range for your condition"),
    }
}

fn blood_pressure_implications(sys: i32, dia: i32, disease: Disease) -> String {
    if disease == Disease::Hypertension {
        format!("Blood pressure {sys}/{dia} requires ongoing monitoring and management")
    } else if sys > 140 || dia > 90 {
        "Elevated blood pressure may increase cardiovascular risk".to_string()
    } else {
        format!("Blood pressure {sys}/{dia} within healthy range")
    }
}

fn spo2_implications(spo2: i32, disease: Disease) -> String {
    if disease == Disease::Asthma && spo2 < 95 {
        "Low oxygen saturation indicates airway compromise - consider bronchodilator".to_string()
    } else if spo2 < 90 {
        "Critically low oxygen saturation requires immediate medical attention".to_string()
    } else {
        format!("Oxygen saturation of {spo2}% indicates adequate respiratory function")
    }
}

fn temperature_implications(temp: f64) -> String {
    if temp > 38.0 {
        "Fever may indicate infection or inflammation requiring evaluation".to_string()
    } else if temp < 36.0 {
        "Low temperature may indicate circulation issues or exposure".to_string()
    } else {
        format!("Body temperature of {temp}°C within normal range")
    }
}

pub fn analyze_vital_signs(vitals: &VitalSigns, disease: Disease) -> VitalSignAnalysis {
    let hr = vitals.heart_rate;
    let heart_rate_status = if (60..=100).contains(&hr) {
        TrendStatus::Normal
    } else if hr > 100 {
        TrendStatus::Elevated
    } else {
        TrendStatus::Low
    };

    let (sys, dia) = (vitals.systolic_bp, vitals.diastolic_bp);
    let bp_status = if sys < 120 && dia < 80 {
        TrendStatus::Normal
    } else if sys >= 140 || dia >= 90 {
        TrendStatus::High
    } else {
        TrendStatus::Elevated
    };

    let spo2_status = match vitals.spo2 {
        s if s >= 95 => TrendStatus::Normal,
        s if s >= 90 => TrendStatus::Low,
        _ => TrendStatus::Critical,
    };

    let temp = vitals.temperature;
    let temp_status = if (36.5..=37.2).contains(&temp) {
        TrendStatus::Normal
    } else if temp > 37.2 {
        TrendStatus::Elevated
    } else {
        TrendStatus::Low
    };

    VitalSignAnalysis {
        heart_rate: SingleVitalAnalysis {
            value: hr,
            status: heart_rate_status,
            implications: heart_rate_implications(hr, disease),
        },
        blood_pressure: BloodPressureAnalysis {
            systolic: sys,
            diastolic: dia,
            status: bp_status,
            implications: blood_pressure_implications(sys, dia, disease),
        },
        oxygen_saturation: SingleVitalAnalysis {
            value: vitals.spo2,
            status: spo2_status,
            implications: spo2_implications(vitals.spo2, disease),
        },
        temperature: SingleVitalAnalysis {
            value: temp,
            status: temp_status,
            implications: temperature_implications(temp),
        },
    }
}

pub fn explain(
    disease: Disease,
    symptoms: Vec<String>,
    vitals: &VitalSigns,
    reference: &ReferenceData,
) -> MedicalExplanation {
    let entry = reference.disease(disease);
    MedicalExplanation {
        disease,
        explanation: entry.explanation.clone(),
        personalized_insights: personalized_insights(disease, vitals),
        diagnostic_criteria: entry.diagnostic_criteria.clone(),
        prevention_strategies: entry.prevention.clone(),
        technology_integration: entry.technology.clone(),
        educational_resources: educational_resources(disease),
        current_symptoms: symptoms,
        vital_sign_analysis: analyze_vital_signs(vitals, disease),
        generated_by: EXPLANATION_GENERATED_BY,
        timestamp: Utc::now(),
        education_level: EDUCATION_LEVEL,
    }
}

pub fn explain_value(
    body: Value,
    reference: &ReferenceData,
) -> Result<MedicalExplanation, AssessmentError> {
    let request: ExplanationRequest = decode(body)?;
    validate_vitals(&request.vitals)?;
    Ok(explain(
        resolve_disease(&request.disease),
        request.symptoms,
        &request.vitals,
        reference,
    ))
}
