//! Recommendation assembly: disease entries first, then situational ones.

use std::collections::BTreeSet;

use crate::models::{Disease, RiskLevel};

use super::helpers::OrderedSet;
use super::messages::{symptom_recommendations, RecommendationText, RECOMMENDATION_SYMPTOMS};
use super::reference::ReferenceData;
use super::scoring::OLDER_ADULT_AGE;

/// Inputs the assembler keys on.
pub struct RecommendationContext<'a> {
    pub disease: Disease,
    pub risk_level: RiskLevel,
    pub emergency_alert: bool,
    pub symptoms: &'a BTreeSet<String>,
    pub age: i32,
}

pub fn assemble_recommendations(
    ctx: &RecommendationContext<'_>,
    reference: &ReferenceData,
) -> Vec<String> {
    let mut out = OrderedSet::default();

    out.extend(
        reference
            .disease(ctx.disease)
            .recommendations
            .iter()
            .map(String::as_str),
    );

    if ctx.emergency_alert {
        out.extend(RecommendationText::EMERGENCY);
    }
    if ctx.risk_level == RiskLevel::High {
        out.push(RecommendationText::HIGH_RISK);
    }
    for symptom in RECOMMENDATION_SYMPTOMS {
        if ctx.symptoms.contains(symptom) {
            out.extend(symptom_recommendations(symptom).iter().copied());
        }
    }
    if ctx.age > OLDER_ADULT_AGE {
        out.extend(RecommendationText::OLDER_ADULT);
    }

    out.into_vec()
}
