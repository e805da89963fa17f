//! Weighted risk scoring and risk-level bucketing.
//!
//! Each vital is checked against a critical tier and a moderate tier; the
//! tiers are exclusive (`else if`), so one vital contributes at most one
//! alert. Only critical tiers raise the emergency flag.

use crate::models::{RiskAssessment, RiskLevel, VitalReading};

use super::messages::{AlertMessages, CRITICAL_SYMPTOMS};

pub const HEART_RATE_CRITICAL_WEIGHT: u32 = 30;
pub const HEART_RATE_MODERATE_WEIGHT: u32 = 10;
pub const SPO2_CRITICAL_WEIGHT: u32 = 35;
pub const SPO2_MODERATE_WEIGHT: u32 = 15;
pub const BLOOD_PRESSURE_CRITICAL_WEIGHT: u32 = 40;
pub const BLOOD_PRESSURE_MODERATE_WEIGHT: u32 = 20;
pub const TEMPERATURE_CRITICAL_WEIGHT: u32 = 25;
pub const TEMPERATURE_MODERATE_WEIGHT: u32 = 10;
pub const CRITICAL_SYMPTOM_WEIGHT: u32 = 20;
pub const OLDER_ADULT_WEIGHT: u32 = 10;
pub const HEART_DISEASE_WEIGHT: u32 = 15;
pub const DIABETES_WEIGHT: u32 = 10;

/// Age above which the older-adult weight applies.
pub const OLDER_ADULT_AGE: i32 = 65;

struct Accumulator {
    assessment: RiskAssessment,
}

impl Accumulator {
    fn critical(&mut self, alert: &str, weight: u32) {
        self.assessment.alerts.push(alert.to_string());
        self.assessment.emergency_alert = true;
        self.assessment.risk_score += weight;
    }

    fn moderate(&mut self, alert: &str, weight: u32) {
        self.assessment.alerts.push(alert.to_string());
        self.assessment.risk_score += weight;
    }

    fn silent(&mut self, weight: u32) {
        self.assessment.risk_score += weight;
    }
}

/// Accumulate the risk score, alerts and emergency flag for a reading.
pub fn score_risk(reading: &VitalReading) -> RiskAssessment {
    let v = &reading.vitals;
    let mut acc = Accumulator {
        assessment: RiskAssessment::default(),
    };

    if v.heart_rate < 40 || v.heart_rate > 150 {
        let alert = if v.heart_rate > 150 {
            AlertMessages::SEVERE_TACHYCARDIA
        } else {
            AlertMessages::SEVERE_BRADYCARDIA
        };
        acc.critical(alert, HEART_RATE_CRITICAL_WEIGHT);
    } else if v.heart_rate < 60 || v.heart_rate > 100 {
        let alert = if v.heart_rate > 100 {
            AlertMessages::HIGH_HEART_RATE
        } else {
            AlertMessages::LOW_HEART_RATE
        };
        acc.moderate(alert, HEART_RATE_MODERATE_WEIGHT);
    }

    if v.spo2 < 85 {
        acc.critical(AlertMessages::SEVERE_HYPOXEMIA, SPO2_CRITICAL_WEIGHT);
    } else if v.spo2 < 95 {
        acc.moderate(AlertMessages::LOW_SPO2, SPO2_MODERATE_WEIGHT);
    }

    if v.systolic_bp > 180 || v.diastolic_bp > 110 {
        acc.critical(AlertMessages::HYPERTENSIVE_CRISIS, BLOOD_PRESSURE_CRITICAL_WEIGHT);
    } else if v.systolic_bp > 140 || v.diastolic_bp > 90 {
        acc.moderate(AlertMessages::HIGH_BLOOD_PRESSURE, BLOOD_PRESSURE_MODERATE_WEIGHT);
    }

    if v.temperature > 39.0 || v.temperature < 35.0 {
        acc.critical(AlertMessages::SEVERE_TEMPERATURE, TEMPERATURE_CRITICAL_WEIGHT);
    } else if v.temperature < 36.5 || v.temperature > 37.5 {
        acc.moderate(AlertMessages::ABNORMAL_TEMPERATURE, TEMPERATURE_MODERATE_WEIGHT);
    }

    if CRITICAL_SYMPTOMS.iter().any(|s| reading.has_symptom(s)) {
        acc.moderate(AlertMessages::CRITICAL_SYMPTOMS, CRITICAL_SYMPTOM_WEIGHT);
    }

    if reading.demographics.age > OLDER_ADULT_AGE {
        acc.silent(OLDER_ADULT_WEIGHT);
    }
    if reading.has_history("Heart Disease") {
        acc.silent(HEART_DISEASE_WEIGHT);
    }
    if reading.has_history("Diabetes") {
        acc.silent(DIABETES_WEIGHT);
    }

    acc.assessment
}

/// Convert a score and emergency flag into a risk level.
/// The emergency flag always wins.
pub fn bucket_risk_level(risk_score: u32, emergency_alert: bool) -> RiskLevel {
    if emergency_alert || risk_score > 60 {
        RiskLevel::Critical
    } else if risk_score > 40 {
        RiskLevel::High
    } else if risk_score > 20 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::{Demographics, Gender, VitalSigns};

    /// Reading with every vital inside its normal band and no modifiers.
    pub(crate) fn baseline() -> VitalReading {
        VitalReading {
            vitals: VitalSigns {
                heart_rate: 75,
                spo2: 98,
                systolic_bp: 120,
                diastolic_bp: 80,
                temperature: 36.8,
            },
            demographics: Demographics {
                age: 45,
                gender: Gender::Male,
            },
            symptoms: BTreeSet::new(),
            medical_history: BTreeSet::new(),
        }
    }

    #[test]
    fn baseline_scores_zero() {
        let result = score_risk(&baseline());
        assert_eq!(result.risk_score, 0);
        assert!(result.alerts.is_empty());
        assert!(!result.emergency_alert);
    }

    #[test]
    fn severe_tachycardia_adds_exactly_thirty() {
        let mut reading = baseline();
        reading.vitals.heart_rate = 151;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, 30);
        assert!(result.emergency_alert);
        assert_eq!(result.alerts, vec![AlertMessages::SEVERE_TACHYCARDIA]);
    }

    #[test]
    fn heart_rate_tiers_are_exclusive() {
        let mut reading = baseline();
        reading.vitals.heart_rate = 35;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, HEART_RATE_CRITICAL_WEIGHT);
        assert_eq!(result.alerts, vec![AlertMessages::SEVERE_BRADYCARDIA]);

        reading.vitals.heart_rate = 55;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, HEART_RATE_MODERATE_WEIGHT);
        assert_eq!(result.alerts, vec![AlertMessages::LOW_HEART_RATE]);
        assert!(!result.emergency_alert);
    }

    #[test]
    fn heart_rate_boundaries() {
        let mut reading = baseline();
        reading.vitals.heart_rate = 150;
        assert_eq!(
            score_risk(&reading).alerts,
            vec![AlertMessages::HIGH_HEART_RATE]
        );
        reading.vitals.heart_rate = 40;
        assert_eq!(
            score_risk(&reading).alerts,
            vec![AlertMessages::LOW_HEART_RATE]
        );
        reading.vitals.heart_rate = 100;
        assert!(score_risk(&reading).alerts.is_empty());
    }

    #[test]
    fn low_spo2_is_moderate() {
        let mut reading = baseline();
        reading.vitals.spo2 = 92;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, 15);
        assert_eq!(result.alerts, vec![AlertMessages::LOW_SPO2]);
        assert!(!result.emergency_alert);
    }

    #[test]
    fn hypoxemia_is_critical() {
        let mut reading = baseline();
        reading.vitals.spo2 = 84;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, 35);
        assert!(result.emergency_alert);
    }

    #[test]
    fn diastolic_alone_triggers_crisis() {
        let mut reading = baseline();
        reading.vitals.diastolic_bp = 111;
        let result = score_risk(&reading);
        assert_eq!(result.alerts, vec![AlertMessages::HYPERTENSIVE_CRISIS]);
        assert_eq!(result.risk_score, 40);
    }

    #[test]
    fn blood_pressure_moderate_tier() {
        let mut reading = baseline();
        reading.vitals.systolic_bp = 141;
        let result = score_risk(&reading);
        assert_eq!(result.alerts, vec![AlertMessages::HIGH_BLOOD_PRESSURE]);
        assert_eq!(result.risk_score, 20);

        reading.vitals.systolic_bp = 140;
        assert!(score_risk(&reading).alerts.is_empty());
    }

    #[test]
    fn temperature_tiers() {
        let mut reading = baseline();
        reading.vitals.temperature = 37.6;
        assert_eq!(score_risk(&reading).risk_score, 10);
        reading.vitals.temperature = 37.5;
        assert_eq!(score_risk(&reading).risk_score, 0);
        reading.vitals.temperature = 39.5;
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, 25);
        assert!(result.emergency_alert);
        reading.vitals.temperature = 34.5;
        assert_eq!(
            score_risk(&reading).alerts,
            vec![AlertMessages::SEVERE_TEMPERATURE]
        );
    }

    #[test]
    fn critical_symptom_counts_once() {
        let mut reading = baseline();
        reading.symptoms.insert("Chest Pain".into());
        reading.symptoms.insert("Confusion".into());
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, CRITICAL_SYMPTOM_WEIGHT);
        assert_eq!(result.alerts, vec![AlertMessages::CRITICAL_SYMPTOMS]);
        assert!(!result.emergency_alert);
    }

    #[test]
    fn non_critical_symptoms_do_not_score() {
        let mut reading = baseline();
        reading.symptoms.insert("Fatigue".into());
        assert_eq!(score_risk(&reading).risk_score, 0);
    }

    #[test]
    fn demographic_and_history_modifiers_add_without_alerts() {
        let mut reading = baseline();
        reading.demographics.age = 66;
        reading.medical_history.insert("Heart Disease".into());
        reading.medical_history.insert("Diabetes".into());
        let result = score_risk(&reading);
        assert_eq!(result.risk_score, 10 + 15 + 10);
        assert!(result.alerts.is_empty());
    }

    #[test]
    fn age_sixty_five_is_not_older_adult() {
        let mut reading = baseline();
        reading.demographics.age = 65;
        assert_eq!(score_risk(&reading).risk_score, 0);
    }

    #[test]
    fn alerts_follow_evaluation_order() {
        let mut reading = baseline();
        reading.vitals.heart_rate = 110;
        reading.vitals.spo2 = 90;
        reading.vitals.systolic_bp = 150;
        reading.vitals.temperature = 38.0;
        reading.symptoms.insert("Shortness of Breath".into());
        let result = score_risk(&reading);
        assert_eq!(
            result.alerts,
            vec![
                AlertMessages::HIGH_HEART_RATE,
                AlertMessages::LOW_SPO2,
                AlertMessages::HIGH_BLOOD_PRESSURE,
                AlertMessages::ABNORMAL_TEMPERATURE,
                AlertMessages::CRITICAL_SYMPTOMS,
            ]
        );
        assert_eq!(result.risk_score, 10 + 15 + 20 + 10 + 20);
    }

    #[test]
    fn everything_critical_exceeds_one_hundred() {
        let mut reading = baseline();
        reading.vitals.heart_rate = 200;
        reading.vitals.spo2 = 70;
        reading.vitals.systolic_bp = 220;
        reading.vitals.temperature = 40.5;
        reading.symptoms.insert("Confusion".into());
        reading.demographics.age = 80;
        reading.medical_history.insert("Heart Disease".into());
        reading.medical_history.insert("Diabetes".into());
        assert_eq!(
            score_risk(&reading).risk_score,
            30 + 35 + 40 + 25 + 20 + 10 + 15 + 10
        );
    }

    #[test]
    fn bucket_step_function() {
        assert_eq!(bucket_risk_level(0, false), RiskLevel::Low);
        assert_eq!(bucket_risk_level(20, false), RiskLevel::Low);
        assert_eq!(bucket_risk_level(21, false), RiskLevel::Medium);
        assert_eq!(bucket_risk_level(40, false), RiskLevel::Medium);
        assert_eq!(bucket_risk_level(41, false), RiskLevel::High);
        assert_eq!(bucket_risk_level(60, false), RiskLevel::High);
        assert_eq!(bucket_risk_level(61, false), RiskLevel::Critical);
        assert_eq!(bucket_risk_level(500, false), RiskLevel::Critical);
    }

    #[test]
    fn bucket_is_non_decreasing() {
        let mut previous = RiskLevel::Low;
        for score in 0..=120 {
            let level = bucket_risk_level(score, false);
            assert!(level >= previous, "score {score}");
            previous = level;
        }
    }

    #[test]
    fn emergency_forces_critical() {
        for score in [0, 15, 30, 50, 70] {
            assert_eq!(bucket_risk_level(score, true), RiskLevel::Critical);
        }
    }
}
