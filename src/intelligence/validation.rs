//! Input validation for vital readings.
//!
//! Every request body passes through here before any rule runs. Missing or
//! mistyped fields are rejected, never defaulted: a silent 0 heart rate would
//! score as severe bradycardia.

use serde::de::DeserializeOwned;

use crate::models::{Demographics, VitalReading, VitalSigns};

use super::types::ValidationError;

/// Declared domain of one numeric field.
struct Domain {
    field: &'static str,
    min: f64,
    max: f64,
}

const HEART_RATE: Domain = Domain {
    field: "heartRate",
    min: 0.0,
    max: 300.0,
};
const SPO2: Domain = Domain {
    field: "spo2",
    min: 0.0,
    max: 100.0,
};
const SYSTOLIC_BP: Domain = Domain {
    field: "systolicBP",
    min: 0.0,
    max: 300.0,
};
const DIASTOLIC_BP: Domain = Domain {
    field: "diastolicBP",
    min: 0.0,
    max: 300.0,
};
const TEMPERATURE: Domain = Domain {
    field: "temperature",
    min: 30.0,
    max: 45.0,
};

fn check(domain: &Domain, value: f64) -> Result<(), ValidationError> {
    // NaN fails both comparisons, so test containment rather than exclusion.
    if (domain.min..=domain.max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: domain.field,
            value,
            min: domain.min,
            max: domain.max,
        })
    }
}

pub fn validate_vitals(vitals: &VitalSigns) -> Result<(), ValidationError> {
    check(&HEART_RATE, f64::from(vitals.heart_rate))?;
    check(&SPO2, f64::from(vitals.spo2))?;
    check(&SYSTOLIC_BP, f64::from(vitals.systolic_bp))?;
    check(&DIASTOLIC_BP, f64::from(vitals.diastolic_bp))?;
    check(&TEMPERATURE, vitals.temperature)?;
    Ok(())
}

pub fn validate_demographics(demographics: &Demographics) -> Result<(), ValidationError> {
    if demographics.age < 0 {
        return Err(ValidationError::Negative {
            field: "age",
            value: i64::from(demographics.age),
        });
    }
    Ok(())
}

pub fn validate_reading(reading: &VitalReading) -> Result<(), ValidationError> {
    validate_vitals(&reading.vitals)?;
    validate_demographics(&reading.demographics)
}

/// Deserialize a JSON value into `T`, mapping serde failures to `Malformed`.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// Decode and validate a full reading from an untyped request body.
pub fn parse_reading(value: serde_json::Value) -> Result<VitalReading, ValidationError> {
    let reading: VitalReading = decode(value)?;
    validate_reading(&reading)?;
    Ok(reading)
}
