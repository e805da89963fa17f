//! National Early Warning Score 2.

use serde::{Deserialize, Serialize};

use super::{require_range, CalculatorError, RiskCalculator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Oxygen {
    #[default]
    Air,
    Oxygen,
}

/// ACVPU scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consciousness {
    #[default]
    Alert,
    Confusion,
    Voice,
    Pain,
    Unresponsive,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News2Input {
    pub respiratory_rate: i32,
    pub oxygen_saturation: i32,
    #[serde(default)]
    pub supplemental_oxygen: Oxygen,
    pub temperature: f64,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    pub heart_rate: i32,
    #[serde(default)]
    pub consciousness: Consciousness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum News2RiskLevel {
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News2Result {
    pub total_score: u32,
    pub risk_level: News2RiskLevel,
    pub frequency: &'static str,
    pub action: &'static str,
}

fn respiratory_rate_points(rr: i32) -> u32 {
    match rr {
        r if r <= 8 => 3,
        r if r <= 11 => 1,
        r if r <= 20 => 0,
        r if r <= 24 => 2,
        _ => 3,
    }
}

fn spo2_points(spo2: i32) -> u32 {
    match spo2 {
        s if s <= 83 => 3,
        s if s <= 85 => 2,
        s if s <= 87 => 1,
        _ => 0,
    }
}

fn temperature_points(temp: f64) -> u32 {
    if temp <= 35.0 {
        3
    } else if temp <= 36.0 {
        1
    } else if temp <= 38.0 {
        0
    } else if temp <= 39.0 {
        1
    } else {
        2
    }
}

fn systolic_points(sbp: i32) -> u32 {
    match sbp {
        s if s <= 70 => 3,
        s if s <= 80 => 2,
        s if s <= 100 => 1,
        s if s <= 219 => 0,
        _ => 3,
    }
}

fn heart_rate_points(hr: i32) -> u32 {
    match hr {
        h if h <= 40 => 3,
        h if h <= 50 => 1,
        h if h <= 90 => 0,
        h if h <= 110 => 1,
        h if h <= 130 => 2,
        _ => 3,
    }
}

fn consciousness_points(level: Consciousness) -> u32 {
    match level {
        Consciousness::Alert => 0,
        Consciousness::Confusion
        | Consciousness::Voice
        | Consciousness::Pain
        | Consciousness::Unresponsive => 3,
    }
}

pub struct News2;

impl RiskCalculator for News2 {
    const NAME: &'static str = "news2";
    type Input = News2Input;
    type Output = News2Result;

    fn calculate(input: &News2Input) -> Result<News2Result, CalculatorError> {
        require_range("respiratoryRate", f64::from(input.respiratory_rate), 0.0, 80.0)?;
        require_range("oxygenSaturation", f64::from(input.oxygen_saturation), 0.0, 100.0)?;
        require_range("temperature", input.temperature, 25.0, 45.0)?;
        require_range("systolicBP", f64::from(input.systolic_bp), 0.0, 300.0)?;
        require_range("heartRate", f64::from(input.heart_rate), 0.0, 300.0)?;

        let oxygen = if input.supplemental_oxygen == Oxygen::Oxygen { 2 } else { 0 };
        let total_score = respiratory_rate_points(input.respiratory_rate)
            + spo2_points(input.oxygen_saturation)
            + oxygen
            + temperature_points(input.temperature)
            + systolic_points(input.systolic_bp)
            + heart_rate_points(input.heart_rate)
            + consciousness_points(input.consciousness);

        let (risk_level, frequency, action) = match total_score {
            0 => (News2RiskLevel::Low, "Minimum 12 hourly", "Continue routine monitoring"),
            1..=4 => (
                News2RiskLevel::LowMedium,
                "Minimum 4-6 hourly",
                "Increase monitoring frequency",
            ),
            5 | 6 => (
                News2RiskLevel::Medium,
                "Minimum 1 hourly",
                "Urgent response threshold",
            ),
            _ => (
                News2RiskLevel::High,
                "Continuous monitoring",
                "Emergency response threshold",
            ),
        };

        Ok(News2Result {
            total_score,
            risk_level,
            frequency,
            action,
        })
    }
}
