use serde::{Deserialize, Serialize};

use super::enums::{Disease, RiskLevel};

/// Output of the risk scorer, before bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RiskAssessment {
    pub risk_score: u32,
    /// One entry per triggered threshold, in evaluation order.
    pub alerts: Vec<String>,
    pub emergency_alert: bool,
}

/// First-matching disease rule and its fixed confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiseaseMatch {
    pub disease: Disease,
    pub confidence: f64,
}

/// Response body of a vital-sign assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub disease: Disease,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub alerts: Vec<String>,
    pub emergency_alert: bool,
    pub recommendations: Vec<String>,
    pub follow_up_required: bool,
}
