//! Pull vital values out of a dictated transcript.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_HEART_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"heart rate (\d+)").unwrap());
static RE_SPO2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"spo2 (\d+)").unwrap());
static RE_BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"blood pressure (\d+) over (\d+)").unwrap());
static RE_TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"temperature (\d+\.?\d*)").unwrap());
static RE_WEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"weight (\d+)").unwrap());
static RE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"height ?(\d+)").unwrap());

#[derive(Debug, Clone, Deserialize)]
pub struct DictationRequest {
    pub transcript: String,
}

/// Fields recognised in a transcript. Unmatched fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictatedVitals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo2: Option<i32>,
    #[serde(rename = "systolicBP", skip_serializing_if = "Option::is_none")]
    pub systolic_bp: Option<i32>,
    #[serde(rename = "diastolicBP", skip_serializing_if = "Option::is_none")]
    pub diastolic_bp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl DictatedVitals {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn capture<T: std::str::FromStr>(re: &Regex, text: &str, group: usize) -> Option<T> {
    re.captures(text)?.get(group)?.as_str().parse().ok()
}

pub fn parse_dictation(transcript: &str) -> DictatedVitals {
    let text = transcript.to_lowercase();
    let (systolic_bp, diastolic_bp) = match RE_BLOOD_PRESSURE.captures(&text) {
        Some(caps) => (
            caps.get(1).and_then(|m| m.as_str().parse().ok()),
            caps.get(2).and_then(|m| m.as_str().parse().ok()),
        ),
        None => (None, None),
    };

    let parsed = DictatedVitals {
        heart_rate: capture(&RE_HEART_RATE, &text, 1),
        spo2: capture(&RE_SPO2, &text, 1),
        systolic_bp,
        diastolic_bp,
        temperature: capture(&RE_TEMPERATURE, &text, 1),
        weight: capture(&RE_WEIGHT, &text, 1),
        height: capture(&RE_HEIGHT, &text, 1),
    };
    if parsed.is_empty() {
        tracing::debug!(chars = transcript.len(), "No vitals recognised in transcript");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sentence() {
        let parsed = parse_dictation(
            "Heart rate 88, SpO2 96, blood pressure 135 over 85, temperature 37.9, weight 80, height 178",
        );
        assert_eq!(
            parsed,
            DictatedVitals {
                heart_rate: Some(88),
                spo2: Some(96),
                systolic_bp: Some(135),
                diastolic_bp: Some(85),
                temperature: Some(37.9),
                weight: Some(80),
                height: Some(178),
            }
        );
    }

    #[test]
    fn partial_transcript_omits_missing_fields() {
        let parsed = parse_dictation("temperature 38");
        assert_eq!(parsed.temperature, Some(38.0));
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value, serde_json::json!({ "temperature": 38.0 }));
    }

    #[test]
    fn height_without_space() {
        assert_eq!(parse_dictation("height170").height, Some(170));
    }

    #[test]
    fn blood_pressure_needs_over() {
        let parsed = parse_dictation("blood pressure 120 80");
        assert_eq!(parsed.systolic_bp, None);
        assert_eq!(parsed.diastolic_bp, None);
    }

    #[test]
    fn overflowing_number_is_ignored() {
        let parsed = parse_dictation("heart rate 99999999999");
        assert_eq!(parsed.heart_rate, None);
        assert!(parsed.is_empty());
    }
}
