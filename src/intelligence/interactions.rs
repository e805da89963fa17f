use serde::{Deserialize, Serialize};

/// Known pairwise interaction. Both drugs must be on the list.
struct InteractionRule {
    first: &'static str,
    second: &'static str,
    warning: &'static str,
}

const INTERACTION_RULES: [InteractionRule; 3] = [
    InteractionRule {
        first: "Warfarin",
        second: "Aspirin",
        warning: "Warfarin + Aspirin: Increased bleeding risk",
    },
    InteractionRule {
        first: "Metformin",
        second: "Prednisone",
        warning: "Metformin + Prednisone: May affect blood sugar control",
    },
    InteractionRule {
        first: "Lisinopril",
        second: "Hydrochlorothiazide",
        warning: "ACE inhibitor + Diuretic: Monitor kidney function",
    },
];

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRequest {
    #[serde(default)]
    pub medications: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionReport {
    pub medications_checked: usize,
    pub interactions: Vec<&'static str>,
}

/// Warnings for every listed pair present, case-insensitive, in rule order.
pub fn check_interactions(medications: &[String]) -> InteractionReport {
    let taking = |name: &str| {
        medications
            .iter()
            .any(|med| med.trim().eq_ignore_ascii_case(name))
    };
    let interactions = INTERACTION_RULES
        .iter()
        .filter(|rule| taking(rule.first) && taking(rule.second))
        .map(|rule| rule.warning)
        .collect();

    InteractionReport {
        medications_checked: medications.len(),
        interactions,
    }
}
