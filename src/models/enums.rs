use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown string for a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form is also the serde representation.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(
    /// Closed set of screening labels. Declaration order is not rule order;
    /// see `intelligence::classification::DISEASE_RULES`.
    Disease {
        Normal => "Normal",
        Asthma => "Asthma",
        Hypertension => "Hypertension",
        Arrhythmia => "Arrhythmia",
        DiabetesMellitus => "Diabetes Mellitus",
    }
);

str_enum!(
    /// Ordinal risk bucket. `Ord` follows severity.
    RiskLevel {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
);

str_enum!(VitalStatus {
    Normal => "Normal",
    High => "High",
    Low => "Low",
    Critical => "Critical",
    Abnormal => "Abnormal",
});

str_enum!(
    /// Urgency of a symptom or symptom combination. `Ord` follows severity.
    Urgency {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
);

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(VitalKind {
    HeartRate => "heartRate",
    Spo2 => "spo2",
    SystolicBp => "systolicBP",
    DiastolicBp => "diastolicBP",
    Temperature => "temperature",
});

impl Disease {
    /// Every disease, in declaration order.
    pub const ALL: [Disease; 5] = [
        Disease::Normal,
        Disease::Asthma,
        Disease::Hypertension,
        Disease::Arrhythmia,
        Disease::DiabetesMellitus,
    ];
}

impl VitalKind {
    pub const ALL: [VitalKind; 5] = [
        VitalKind::HeartRate,
        VitalKind::Spo2,
        VitalKind::SystolicBp,
        VitalKind::DiastolicBp,
        VitalKind::Temperature,
    ];

    /// Display unit for this vital.
    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "bpm",
            VitalKind::Spo2 => "%",
            VitalKind::SystolicBp | VitalKind::DiastolicBp => "mmHg",
            VitalKind::Temperature => "°C",
        }
    }
}
