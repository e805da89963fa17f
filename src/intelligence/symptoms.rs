//! Symptom analysis: combination patterns, per-symptom database lookups and
//! vital-sign correlation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Demographics, Gender, Urgency, VitalSigns};

use super::helpers::{mentions, OrderedSet};
use super::messages::{symptom_recommendations, RecommendationText, RECOMMENDATION_SYMPTOMS};
use super::reference::{ReferenceData, SymptomPattern};
use super::scoring::OLDER_ADULT_AGE;
use super::types::AssessmentError;
use super::validation::{decode, validate_demographics, validate_vitals};

pub const GENERATED_BY: &str = "Offline Symptom Analysis";
pub const DISCLAIMER: &str =
    "This analysis is for educational purposes only and does not replace professional medical advice";

const NO_CORRELATION: &str = "Vital signs do not show immediate correlation with reported symptoms";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub vitals: VitalSigns,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    /// Input symptoms with a high or critical database urgency.
    pub primary_concerns: Vec<String>,
    pub urgency_level: Urgency,
    pub analysis: String,
    pub possible_conditions: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub medical_reasoning: String,
    pub vital_sign_correlation: String,
    pub risk_factors: Vec<String>,
    pub input_symptoms: Vec<String>,
    pub analysis_timestamp: DateTime<Utc>,
    pub generated_by: &'static str,
    pub disclaimer: &'static str,
    pub emergency_contact: Option<&'static str>,
}

/// First pattern with at least `min(2, len)` of its symptoms present.
pub fn find_matching_pattern<'a>(
    symptoms: &[String],
    patterns: &'a [SymptomPattern],
) -> Option<&'a SymptomPattern> {
    patterns.iter().find(|pattern| {
        let present = pattern
            .symptoms
            .iter()
            .filter(|name| mentions(symptoms, name))
            .count();
        present >= pattern.symptoms.len().min(2)
    })
}

pub fn correlate_with_vitals(symptoms: &[String], vitals: &VitalSigns) -> String {
    let mut correlations = Vec::new();

    if mentions(symptoms, "Chest Pain") && vitals.heart_rate > 100 {
        correlations.push("Tachycardia with chest pain increases cardiac event suspicion");
    }
    if mentions(symptoms, "Shortness of Breath") && vitals.spo2 < 95 {
        correlations.push("Low oxygen saturation confirms respiratory compromise");
    }
    if mentions(symptoms, "Dizziness") && (vitals.systolic_bp < 90 || vitals.systolic_bp > 160) {
        correlations.push("Blood pressure abnormalities correlate with reported dizziness");
    }
    if mentions(symptoms, "Palpitations") && (vitals.heart_rate > 120 || vitals.heart_rate < 50) {
        correlations.push("Heart rate abnormalities confirm palpitation symptoms");
    }
    if mentions(symptoms, "Fever") && vitals.temperature > 37.5 {
        correlations.push("Elevated temperature confirms febrile presentation");
    }

    if correlations.is_empty() {
        NO_CORRELATION.to_string()
    } else {
        correlations.join(". ")
    }
}

pub fn medical_reasoning(
    symptoms: &[String],
    vitals: &VitalSigns,
    demographics: &Demographics,
) -> String {
    let mut reasoning = format!(
        "Analysis of {} symptoms in {}-year-old {}: ",
        symptoms.len(),
        demographics.age,
        demographics.gender
    );

    if demographics.age > OLDER_ADULT_AGE {
        reasoning.push_str("Advanced age increases risk for serious pathology. ");
    }
    if demographics.age < 30 {
        reasoning.push_str("Younger age makes serious pathology less likely but not excluded. ");
    }
    if vitals.heart_rate > 100 {
        reasoning.push_str("Tachycardia suggests physiologic stress or pathology. ");
    }
    if vitals.spo2 < 95 {
        reasoning.push_str("Hypoxemia indicates respiratory or circulatory compromise. ");
    }
    if vitals.systolic_bp > 140 {
        reasoning.push_str("Hypertension may be primary condition or secondary to pain/stress. ");
    }
    if mentions(symptoms, "Chest Pain") {
        reasoning.push_str("Chest pain requires cardiac and pulmonary evaluation. ");
    }
    if mentions(symptoms, "Shortness of Breath") {
        reasoning.push_str("Dyspnea warrants respiratory and cardiac assessment. ");
    }

    reasoning
}

pub fn risk_factors(demographics: &Demographics, vitals: &VitalSigns) -> Vec<String> {
    let age = demographics.age;
    let checks = [
        (age > OLDER_ADULT_AGE, "Advanced age"),
        (age > 45 && demographics.gender == Gender::Male, "Male gender >45"),
        (age > 55 && demographics.gender == Gender::Female, "Female gender >55"),
        (vitals.systolic_bp > 140, "Hypertension"),
        (vitals.heart_rate > 100, "Tachycardia"),
        (vitals.spo2 < 95, "Hypoxemia"),
        (vitals.temperature > 38.0, "Fever"),
    ];
    checks
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, factor)| factor.to_string())
        .collect()
}

/// Urgency tier entries, then symptom entries, then older-adult entries.
pub fn personalized_recommendations(
    symptoms: &[String],
    demographics: &Demographics,
    urgency: Urgency,
) -> Vec<&'static str> {
    let mut recs: Vec<&'static str> = match urgency {
        Urgency::Critical => RecommendationText::URGENCY_CRITICAL.to_vec(),
        Urgency::High => RecommendationText::URGENCY_HIGH.to_vec(),
        Urgency::Medium | Urgency::Low => RecommendationText::URGENCY_ROUTINE.to_vec(),
    };
    for symptom in RECOMMENDATION_SYMPTOMS {
        if mentions(symptoms, symptom) {
            recs.extend_from_slice(symptom_recommendations(symptom));
        }
    }
    if demographics.age > OLDER_ADULT_AGE {
        recs.extend_from_slice(&RecommendationText::OLDER_ADULT);
    }
    recs
}

/// Analyse a validated request.
pub fn analyze_symptoms(
    request: &SymptomAnalysisRequest,
    reference: &ReferenceData,
) -> Result<SymptomAnalysis, AssessmentError> {
    let symptoms = &request.symptoms;
    if symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(AssessmentError::NoInput);
    }

    let mut urgency = Urgency::Low;
    let mut analysis = String::new();
    let mut conditions = OrderedSet::default();
    let mut recommendations = OrderedSet::default();
    let mut red_flags = OrderedSet::default();
    let mut questions = OrderedSet::default();
    let mut concerns = OrderedSet::default();

    if let Some(pattern) = find_matching_pattern(symptoms, reference.patterns()) {
        tracing::debug!(
            pattern = %pattern.name,
            urgency = %pattern.urgency,
            "Symptom pattern matched"
        );
        urgency = pattern.urgency;
        analysis = pattern.analysis.clone();
        conditions.extend(pattern.possible_conditions.iter().map(String::as_str));
        recommendations.extend(pattern.recommendations.iter().map(String::as_str));
    }

    for symptom in symptoms {
        let Some(entry) = reference.symptom(symptom) else {
            continue;
        };
        conditions.extend(entry.possible_conditions.iter().map(String::as_str));
        red_flags.extend(entry.red_flags.iter().map(String::as_str));
        questions.extend(entry.follow_up_questions.iter().map(String::as_str));
        // Medium and low entries never raise the level.
        if entry.urgency >= Urgency::High {
            urgency = urgency.max(entry.urgency);
            concerns.push(&entry.name);
        }
    }

    recommendations.extend(personalized_recommendations(
        symptoms,
        &request.demographics,
        urgency,
    ));

    let emergency_contact =
        (urgency == Urgency::Critical).then_some(RecommendationText::EMERGENCY_CONTACT);

    tracing::info!(
        symptoms = symptoms.len(),
        urgency = %urgency,
        emergency = emergency_contact.is_some(),
        "Symptom analysis complete"
    );

    Ok(SymptomAnalysis {
        primary_concerns: concerns.into_vec(),
        urgency_level: urgency,
        analysis,
        possible_conditions: conditions.into_vec(),
        red_flags: red_flags.into_vec(),
        recommendations: recommendations.into_vec(),
        follow_up_questions: questions.into_vec(),
        medical_reasoning: medical_reasoning(symptoms, &request.vitals, &request.demographics),
        vital_sign_correlation: correlate_with_vitals(symptoms, &request.vitals),
        risk_factors: risk_factors(&request.demographics, &request.vitals),
        input_symptoms: symptoms.clone(),
        analysis_timestamp: Utc::now(),
        generated_by: GENERATED_BY,
        disclaimer: DISCLAIMER,
        emergency_contact,
    })
}

/// Decode, validate and analyse an untyped request body.
pub fn analyze_symptoms_value(
    body: Value,
    reference: &ReferenceData,
) -> Result<SymptomAnalysis, AssessmentError> {
    let request: SymptomAnalysisRequest = decode(body)?;
    if request.symptoms.is_empty() {
        return Err(AssessmentError::NoInput);
    }
    validate_vitals(&request.vitals)?;
    validate_demographics(&request.demographics)?;
    analyze_symptoms(&request, reference)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::intelligence::types::ValidationError;

    fn request(symptoms: &[&str]) -> SymptomAnalysisRequest {
        SymptomAnalysisRequest {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            vitals: VitalSigns {
                heart_rate: 75,
                spo2: 98,
                systolic_bp: 120,
                diastolic_bp: 80,
                temperature: 36.8,
            },
            demographics: Demographics {
                age: 40,
                gender: Gender::Female,
            },
        }
    }

    #[test]
    fn empty_symptoms_is_no_input() {
        let data = ReferenceData::load_test();
        let err = analyze_symptoms(&request(&[]), &data).unwrap_err();
        assert_eq!(err, AssessmentError::NoInput);
    }

    #[test]
    fn missing_symptoms_field_is_no_input() {
        let data = ReferenceData::load_test();
        let body = json!({
            "vitals": {
                "heartRate": 75,
                "spo2": 98,
                "systolicBP": 120,
                "diastolicBP": 80,
                "temperature": 36.8
            },
            "demographics": { "age": 40, "gender": "female" }
        });
        assert_eq!(
            analyze_symptoms_value(body, &data).unwrap_err(),
            AssessmentError::NoInput
        );
    }

    #[test]
    fn invalid_vitals_are_rejected() {
        let data = ReferenceData::load_test();
        let body = json!({
            "symptoms": ["Cough"],
            "vitals": {
                "heartRate": 75,
                "spo2": 140,
                "systolicBP": 120,
                "diastolicBP": 80,
                "temperature": 36.8
            },
            "demographics": { "age": 40, "gender": "female" }
        });
        let err = analyze_symptoms_value(body, &data).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::Validation(ValidationError::OutOfRange { field: "spo2", .. })
        ));
    }

    #[test]
    fn chest_pain_with_dyspnea_is_critical() {
        let data = ReferenceData::load_test();
        let result =
            analyze_symptoms(&request(&["Chest Pain", "Shortness of Breath"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Critical);
        assert_eq!(
            result.emergency_contact,
            Some("Call emergency services immediately")
        );
        assert_eq!(result.possible_conditions[0], "Myocardial Infarction");
        assert_eq!(result.recommendations[0], "Seek immediate emergency care");
        assert!(result
            .recommendations
            .contains(&"Do not drive yourself to hospital".to_string()));
        assert_eq!(
            result.primary_concerns,
            vec!["Chest Pain", "Shortness of Breath"]
        );
    }

    #[test]
    fn pattern_needs_two_symptoms() {
        let data = ReferenceData::load_test();
        let one = [String::from("Chest Pain")];
        assert!(find_matching_pattern(&one, data.patterns()).is_none());
        let one = [String::from("Shortness of Breath")];
        assert!(find_matching_pattern(&one, data.patterns()).is_none());

        let two = [String::from("fever"), String::from("COUGH")];
        let pattern = find_matching_pattern(&two, data.patterns()).unwrap();
        assert_eq!(pattern.name, "fever_cough_shortness_of_breath");
    }

    #[test]
    fn first_matching_pattern_wins() {
        let data = ReferenceData::load_test();
        let symptoms: Vec<String> = ["Palpitations", "Chest Pain", "Shortness of Breath"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let pattern = find_matching_pattern(&symptoms, data.patterns()).unwrap();
        assert_eq!(pattern.name, "chest_pain_shortness_of_breath");
    }

    #[test]
    fn medium_symptoms_do_not_raise_urgency() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Cough", "Headache"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Low);
        assert_eq!(result.emergency_contact, None);
        assert_eq!(
            result.recommendations[0],
            "Schedule routine medical follow-up"
        );
        assert!(result.analysis.is_empty());
    }

    #[test]
    fn lone_fever_stays_low() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Fever"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Low);
        assert!(result.primary_concerns.is_empty());
    }

    #[test]
    fn high_symptom_raises_low_level() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Chest Pain", "Fatigue"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::High);
        assert_eq!(result.primary_concerns, vec!["Chest Pain"]);
    }

    #[test]
    fn high_symptom_keeps_critical_pattern() {
        let data = ReferenceData::load_test();
        let result =
            analyze_symptoms(&request(&["Headache", "Fever", "Confusion"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Critical);

        let result =
            analyze_symptoms(&request(&["Chest Pain", "Shortness of Breath"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Critical);
        assert!(result.emergency_contact.is_some());
    }

    #[test]
    fn unknown_symptoms_stay_low() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Itchy elbow"]), &data).unwrap();
        assert_eq!(result.urgency_level, Urgency::Low);
        assert!(result.possible_conditions.is_empty());
        assert_eq!(result.input_symptoms, vec!["Itchy elbow"]);
    }

    #[test]
    fn conditions_are_deduplicated() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Cough", "Shortness of Breath"]), &data).unwrap();
        let asthma = result
            .possible_conditions
            .iter()
            .filter(|c| c.as_str() == "Asthma")
            .count();
        assert_eq!(asthma, 1);
    }

    #[test]
    fn correlation_sentences() {
        let vitals = VitalSigns {
            heart_rate: 130,
            spo2: 90,
            systolic_bp: 120,
            diastolic_bp: 80,
            temperature: 38.4,
        };
        let symptoms = vec!["Chest Pain".to_string(), "Fever".to_string()];
        assert_eq!(
            correlate_with_vitals(&symptoms, &vitals),
            "Tachycardia with chest pain increases cardiac event suspicion. \
             Elevated temperature confirms febrile presentation"
        );
        assert_eq!(
            correlate_with_vitals(&["Cough".to_string()], &vitals),
            NO_CORRELATION
        );
    }

    #[test]
    fn reasoning_mentions_age_and_vitals() {
        let vitals = VitalSigns {
            heart_rate: 110,
            spo2: 98,
            systolic_bp: 120,
            diastolic_bp: 80,
            temperature: 36.8,
        };
        let demographics = Demographics {
            age: 70,
            gender: Gender::Male,
        };
        let text = medical_reasoning(&["Cough".to_string()], &vitals, &demographics);
        assert!(text.starts_with("Analysis of 1 symptoms in 70-year-old male: "));
        assert!(text.contains("Advanced age"));
        assert!(text.contains("Tachycardia suggests"));
    }

    #[test]
    fn risk_factor_list() {
        let vitals = VitalSigns {
            heart_rate: 105,
            spo2: 93,
            systolic_bp: 150,
            diastolic_bp: 80,
            temperature: 38.5,
        };
        let demographics = Demographics {
            age: 70,
            gender: Gender::Male,
        };
        assert_eq!(
            risk_factors(&demographics, &vitals),
            vec![
                "Advanced age",
                "Male gender >45",
                "Hypertension",
                "Tachycardia",
                "Hypoxemia",
                "Fever"
            ]
        );
    }

    #[test]
    fn older_adult_recommendations_come_last() {
        let demographics = Demographics {
            age: 80,
            gender: Gender::Other,
        };
        let recs =
            personalized_recommendations(&["Fever".to_string()], &demographics, Urgency::High);
        assert_eq!(recs[0], "Seek medical evaluation within 24 hours");
        assert_eq!(recs[3], "Stay hydrated and rest");
        assert_eq!(recs.last(), Some(&"Ensure medication compliance"));
    }

    #[test]
    fn response_shape() {
        let data = ReferenceData::load_test();
        let result = analyze_symptoms(&request(&["Nausea"]), &data).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["urgencyLevel"], "low");
        assert!(value["emergencyContact"].is_null());
        assert_eq!(value["generatedBy"], GENERATED_BY);
        assert!(value["analysisTimestamp"].is_string());
    }
}
