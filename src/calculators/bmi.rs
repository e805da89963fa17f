use serde::{Deserialize, Serialize};

use super::{require_positive, CalculatorError, RiskCalculator};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// Rounded to one decimal.
    pub bmi: f64,
    pub category: &'static str,
    pub risk: &'static str,
}

/// Upper bound (exclusive), category, risk sentence.
const BMI_BANDS: [(f64, &str, &str); 5] = [
    (18.5, "Underweight", "Increased risk of malnutrition"),
    (25.0, "Normal weight", "Low health risk"),
    (30.0, "Overweight", "Increased risk of cardiovascular disease"),
    (35.0, "Obesity Class I", "High risk of cardiovascular disease"),
    (40.0, "Obesity Class II", "Very high risk of cardiovascular disease"),
];

const TOP_BAND: (&str, &str) = (
    "Obesity Class III",
    "Extremely high risk of cardiovascular disease",
);

pub struct Bmi;

impl RiskCalculator for Bmi {
    const NAME: &'static str = "bmi";
    type Input = BmiInput;
    type Output = BmiResult;

    fn calculate(input: &BmiInput) -> Result<BmiResult, CalculatorError> {
        require_positive("heightCm", input.height_cm)?;
        require_positive("weightKg", input.weight_kg)?;

        let height_m = input.height_cm / 100.0;
        let bmi = input.weight_kg / (height_m * height_m);
        let (category, risk) = BMI_BANDS
            .iter()
            .find(|(upper, _, _)| bmi < *upper)
            .map(|(_, category, risk)| (*category, *risk))
            .unwrap_or(TOP_BAND);

        Ok(BmiResult {
            bmi: (bmi * 10.0).round() / 10.0,
            category,
            risk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, CalculatorError> {
        Bmi::calculate(&BmiInput {
            height_cm,
            weight_kg,
        })
    }

    #[test]
    fn normal_weight() {
        let result = bmi(180.0, 75.0).unwrap();
        assert_eq!(result.bmi, 23.1);
        assert_eq!(result.category, "Normal weight");
        assert_eq!(result.risk, "Low health risk");
    }

    #[test]
    fn band_edges() {
        assert_eq!(bmi(100.0, 18.4).unwrap().category, "Underweight");
        assert_eq!(bmi(100.0, 25.0).unwrap().category, "Overweight");
        assert_eq!(bmi(100.0, 39.9).unwrap().category, "Obesity Class II");
        assert_eq!(bmi(100.0, 40.0).unwrap().category, "Obesity Class III");
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(matches!(
            bmi(0.0, 70.0),
            Err(CalculatorError::NonPositive { field: "heightCm", .. })
        ));
        assert!(bmi(170.0, -1.0).is_err());
    }
}
