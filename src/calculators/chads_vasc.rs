//! CHA2DS2-VASc stroke risk score for atrial fibrillation.

use serde::{Deserialize, Serialize};

use super::{CalculatorError, RiskCalculator};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChadsVascInput {
    pub chf: bool,
    pub hypertension: bool,
    pub age75_plus: bool,
    pub diabetes: bool,
    pub stroke_history: bool,
    pub vascular_disease: bool,
    #[serde(rename = "age65to74")]
    pub age65_to74: bool,
    pub female_gender: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChadsVascResult {
    pub score: u32,
    pub stroke_risk: String,
    pub recommendation: &'static str,
}

pub struct ChadsVasc;

impl RiskCalculator for ChadsVasc {
    const NAME: &'static str = "chads-vasc";
    type Input = ChadsVascInput;
    type Output = ChadsVascResult;

    fn calculate(input: &ChadsVascInput) -> Result<ChadsVascResult, CalculatorError> {
        let weighted = [
            (input.chf, 1),
            (input.hypertension, 1),
            (input.age75_plus, 2),
            (input.diabetes, 1),
            (input.stroke_history, 2),
            (input.vascular_disease, 1),
            (input.age65_to74, 1),
            (input.female_gender, 1),
        ];
        let score: u32 = weighted
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, weight)| weight)
            .sum();

        let (stroke_risk, recommendation) = match score {
            0 => ("0.2% per year".to_string(), "No anticoagulation recommended"),
            1 => ("0.6% per year".to_string(), "Consider anticoagulation"),
            2 => ("2.2% per year".to_string(), "Anticoagulation recommended"),
            s => (
                format!("{}% per year", (s * 2).min(15)),
                "Strong anticoagulation recommendation",
            ),
        };

        Ok(ChadsVascResult {
            score,
            stroke_risk,
            recommendation,
        })
    }
}
