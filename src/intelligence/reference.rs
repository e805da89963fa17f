use serde::{Deserialize, Serialize};

use crate::models::{Disease, Severity, Urgency};

use super::types::ReferenceError;

const DISEASES_JSON: &str = include_str!("../../resources/diseases.json");
const SYMPTOMS_JSON: &str = include_str!("../../resources/symptoms.json");

/// Base symptom profile for a disease, before vital/age adjustments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomProfile {
    pub primary_symptoms: Vec<String>,
    pub secondary_symptoms: Vec<String>,
    pub explanation: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

/// Long-form patient education for a disease.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseExplanation {
    pub disease_explanation: String,
    pub symptom_connection: String,
    pub pathophysiology: String,
    pub prognosis: String,
    pub lifestyle: String,
    pub when_to_seek_help: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticCriterion {
    pub label: String,
    pub value: String,
}

/// Monitoring devices and their features. Empty for `Normal`; empty lists
/// are omitted on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnologyIntegration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// Everything the service says about one disease.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseReference {
    pub disease: Disease,
    pub description: String,
    pub education: String,
    /// Recommendations attached to an assessment that lands on this disease.
    pub recommendations: Vec<String>,
    pub profile: SymptomProfile,
    /// One-paragraph mechanism used in the symptom profile's educational context.
    pub pathophysiology: String,
    pub monitoring: Vec<String>,
    pub red_flags: Vec<String>,
    pub explanation: DiseaseExplanation,
    pub diagnostic_criteria: Vec<DiagnosticCriterion>,
    pub prevention: Vec<String>,
    #[serde(default)]
    pub technology: TechnologyIntegration,
}

/// Single-symptom entry of the symptom analysis database.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReference {
    pub name: String,
    pub urgency: Urgency,
    pub possible_conditions: Vec<String>,
    pub red_flags: Vec<String>,
    pub follow_up_questions: Vec<String>,
}

/// Symptom combination recognised by symptom analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomPattern {
    pub name: String,
    pub symptoms: Vec<String>,
    pub urgency: Urgency,
    pub analysis: String,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Deserialize)]
struct SymptomFile {
    symptoms: Vec<SymptomReference>,
    patterns: Vec<SymptomPattern>,
}

/// Static medical text, parsed once at startup and shared read-only.
#[derive(Debug)]
pub struct ReferenceData {
    /// Indexed by `Disease` discriminant; every disease is present.
    diseases: Vec<DiseaseReference>,
    symptoms: Vec<SymptomReference>,
    patterns: Vec<SymptomPattern>,
}

impl ReferenceData {
    /// Parse the JSON tables compiled into the binary.
    pub fn load_embedded() -> Result<Self, ReferenceError> {
        Self::from_json(DISEASES_JSON, SYMPTOMS_JSON)
    }

    pub fn from_json(diseases_json: &str, symptoms_json: &str) -> Result<Self, ReferenceError> {
        let mut parsed: Vec<DiseaseReference> = serde_json::from_str(diseases_json)
            .map_err(|e| ReferenceError::Parse("diseases.json", e.to_string()))?;
        let symptom_file: SymptomFile = serde_json::from_str(symptoms_json)
            .map_err(|e| ReferenceError::Parse("symptoms.json", e.to_string()))?;

        let mut diseases = Vec::with_capacity(Disease::ALL.len());
        for disease in Disease::ALL {
            let position = parsed
                .iter()
                .position(|entry| entry.disease == disease)
                .ok_or_else(|| {
                    ReferenceError::MissingEntry("diseases.json", disease.to_string())
                })?;
            diseases.push(parsed.swap_remove(position));
        }

        tracing::debug!(
            diseases = diseases.len(),
            symptoms = symptom_file.symptoms.len(),
            patterns = symptom_file.patterns.len(),
            "Reference data loaded"
        );

        Ok(Self {
            diseases,
            symptoms: symptom_file.symptoms,
            patterns: symptom_file.patterns,
        })
    }

    pub fn disease(&self, disease: Disease) -> &DiseaseReference {
        &self.diseases[disease as usize]
    }

    /// Case-insensitive lookup in the symptom database.
    pub fn symptom(&self, name: &str) -> Option<&SymptomReference> {
        self.symptoms
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Combination patterns in match-priority order.
    pub fn patterns(&self) -> &[SymptomPattern] {
        &self.patterns
    }

    /// Embedded data for tests.
    #[cfg(test)]
    pub(crate) fn load_test() -> Self {
        Self::load_embedded().expect("embedded reference data must parse")
    }
}
