//! Ten-year cardiovascular risk from simplified Framingham points.

use serde::{Deserialize, Serialize};

use crate::models::Gender;

use super::{require_positive, require_range, CalculatorError, RiskCalculator};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardiovascularInput {
    pub age: i32,
    pub gender: Gender,
    pub total_cholesterol: i32,
    pub hdl_cholesterol: i32,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    #[serde(default)]
    pub smoker: bool,
    #[serde(default)]
    pub diabetes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardiovascularRiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardiovascularResult {
    pub points: i32,
    pub risk_percent: u32,
    pub risk_level: CardiovascularRiskLevel,
}

/// Age points for men, then women, by band starting at 20, 35, 40 ... 75.
const AGE_BAND_STARTS: [i32; 10] = [20, 35, 40, 45, 50, 55, 60, 65, 70, 75];
const MALE_AGE_POINTS: [i32; 10] = [-9, -4, 0, 3, 6, 8, 10, 11, 12, 13];
const FEMALE_AGE_POINTS: [i32; 10] = [-7, -3, 0, 3, 6, 8, 10, 12, 14, 16];

const SMOKER_POINTS: i32 = 8;
const DIABETES_POINTS: i32 = 6;

fn age_points(age: i32, gender: Gender) -> i32 {
    let table = match gender {
        Gender::Male => &MALE_AGE_POINTS,
        Gender::Female | Gender::Other => &FEMALE_AGE_POINTS,
    };
    AGE_BAND_STARTS
        .iter()
        .rposition(|start| age >= *start)
        .map(|band| table[band])
        .unwrap_or(0)
}

fn cholesterol_points(total: i32) -> i32 {
    match total {
        t if t < 160 => 0,
        t if t < 200 => 4,
        t if t < 240 => 7,
        t if t < 280 => 9,
        _ => 11,
    }
}

fn hdl_points(hdl: i32) -> i32 {
    match hdl {
        h if h >= 60 => -1,
        h if h >= 50 => 0,
        h if h >= 40 => 1,
        _ => 2,
    }
}

fn blood_pressure_points(systolic: i32) -> i32 {
    match systolic {
        s if s < 130 => 0,
        s if s < 160 => 1,
        _ => 2,
    }
}

fn risk_percent(points: i32) -> u32 {
    match points {
        p if p < 0 => 1,
        p if p < 5 => 2,
        p if p < 10 => 4,
        p if p < 15 => 8,
        p if p < 20 => 16,
        p if p < 25 => 25,
        _ => 30,
    }
}

pub struct CardiovascularRisk;

impl RiskCalculator for CardiovascularRisk {
    const NAME: &'static str = "cardiovascular";
    type Input = CardiovascularInput;
    type Output = CardiovascularResult;

    fn calculate(input: &CardiovascularInput) -> Result<CardiovascularResult, CalculatorError> {
        require_range("age", f64::from(input.age), 20.0, 120.0)?;
        require_positive("totalCholesterol", f64::from(input.total_cholesterol))?;
        require_positive("hdlCholesterol", f64::from(input.hdl_cholesterol))?;
        require_positive("systolicBP", f64::from(input.systolic_bp))?;

        let mut points = age_points(input.age, input.gender)
            + cholesterol_points(input.total_cholesterol)
            + hdl_points(input.hdl_cholesterol)
            + blood_pressure_points(input.systolic_bp);
        if input.smoker {
            points += SMOKER_POINTS;
        }
        if input.diabetes {
            points += DIABETES_POINTS;
        }

        let risk_percent = risk_percent(points);
        let risk_level = if risk_percent >= 20 {
            CardiovascularRiskLevel::High
        } else if risk_percent >= 10 {
            CardiovascularRiskLevel::Moderate
        } else {
            CardiovascularRiskLevel::Low
        };

        Ok(CardiovascularResult {
            points,
            risk_percent,
            risk_level,
        })
    }
}
