pub mod assessment;
pub mod enums;
pub mod vital_sign;

pub use assessment::{AssessmentResult, DiseaseMatch, RiskAssessment};
pub use enums::{Disease, Gender, RiskLevel, Severity, Urgency, VitalKind, VitalStatus};
pub use vital_sign::{Demographics, VitalReading, VitalSigns};
