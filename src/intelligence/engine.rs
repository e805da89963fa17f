use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::models::{AssessmentResult, RiskLevel, VitalReading};

use super::classification::classify_disease;
use super::recommendations::{assemble_recommendations, RecommendationContext};
use super::reference::ReferenceData;
use super::scoring::{bucket_risk_level, score_risk};
use super::types::{AssessmentError, ValidationError};
use super::validation::parse_reading;

/// Score, classify, bucket and assemble recommendations for a validated reading.
///
/// Pure: the same reading always yields the same result.
pub fn assess(reading: &VitalReading, reference: &ReferenceData) -> AssessmentResult {
    let risk = score_risk(reading);
    let disease = classify_disease(&reading.vitals);
    let risk_level = bucket_risk_level(risk.risk_score, risk.emergency_alert);

    let recommendations = assemble_recommendations(
        &RecommendationContext {
            disease: disease.disease,
            risk_level,
            emergency_alert: risk.emergency_alert,
            symptoms: &reading.symptoms,
            age: reading.demographics.age,
        },
        reference,
    );

    tracing::debug!(
        score = risk.risk_score,
        level = %risk_level,
        disease = %disease.disease,
        alerts = risk.alerts.len(),
        emergency = risk.emergency_alert,
        "Assessment complete"
    );

    let follow_up_required = risk_level != RiskLevel::Low || !risk.alerts.is_empty();

    AssessmentResult {
        disease: disease.disease,
        confidence: disease.confidence,
        risk_level,
        risk_score: risk.risk_score,
        alerts: risk.alerts,
        emergency_alert: risk.emergency_alert,
        recommendations,
        follow_up_required,
    }
}

/// Validate an untyped request body, then assess it.
pub fn assess_value(
    body: Value,
    reference: &ReferenceData,
) -> Result<AssessmentResult, AssessmentError> {
    let reading = parse_reading(body)?;
    Ok(assess(&reading, reference))
}

// ---------------------------------------------------------------------------
// Batch assessment
// ---------------------------------------------------------------------------

/// Per-record outcome. Serialized as `{"result": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchOutcome {
    Result(AssessmentResult),
    Error { code: &'static str, message: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub patient_id: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total: usize,
    pub assessed: usize,
    pub failed: usize,
    /// Count of successful assessments per risk level.
    pub risk_level_counts: BTreeMap<RiskLevel, usize>,
    pub entries: Vec<BatchEntry>,
}

/// Assess every record of a JSON array independently.
///
/// A record that fails validation becomes an error entry; the rest of the
/// batch still runs. Records without a `patientId` are named `Patient {n}`
/// (1-based position).
pub fn assess_batch(
    body: Value,
    max_batch_size: usize,
    reference: &ReferenceData,
) -> Result<BatchReport, AssessmentError> {
    let Value::Array(records) = body else {
        return Err(
            ValidationError::Malformed("expected an array of patient records".into()).into(),
        );
    };
    if records.len() > max_batch_size {
        return Err(ValidationError::BatchTooLarge {
            size: records.len(),
            limit: max_batch_size,
        }
        .into());
    }

    let total = records.len();
    let mut entries = Vec::with_capacity(total);
    let mut risk_level_counts = BTreeMap::new();

    for (index, record) in records.into_iter().enumerate() {
        let patient_id = record
            .get("patientId")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Patient {}", index + 1));

        let outcome = match parse_reading(record) {
            Ok(reading) => {
                let result = assess(&reading, reference);
                *risk_level_counts.entry(result.risk_level).or_insert(0) += 1;
                BatchOutcome::Result(result)
            }
            Err(e) => {
                tracing::warn!(patient_id = %patient_id, error = %e, "Batch record rejected");
                BatchOutcome::Error {
                    code: e.code(),
                    message: e.to_string(),
                }
            }
        };
        entries.push(BatchEntry {
            patient_id,
            outcome,
        });
    }

    let assessed: usize = risk_level_counts.values().sum();
    tracing::info!(total, assessed, "Batch assessment complete");

    Ok(BatchReport {
        total,
        assessed,
        failed: total - assessed,
        risk_level_counts,
        entries,
    })
}
