/// Alert and recommendation wording shared by the scorer, the assembler and
/// symptom analysis. Tests assert on these exact strings, so they live in
/// one place.
pub struct AlertMessages;

impl AlertMessages {
    pub const SEVERE_TACHYCARDIA: &'static str = "Critical: Severe Tachycardia";
    pub const SEVERE_BRADYCARDIA: &'static str = "Critical: Severe Bradycardia";
    pub const HIGH_HEART_RATE: &'static str = "High Heart Rate";
    pub const LOW_HEART_RATE: &'static str = "Low Heart Rate";

    pub const SEVERE_HYPOXEMIA: &'static str = "Critical: Severe Hypoxemia";
    pub const LOW_SPO2: &'static str = "Low SpO2 Level";

    pub const HYPERTENSIVE_CRISIS: &'static str = "Critical: Hypertensive Crisis";
    pub const HIGH_BLOOD_PRESSURE: &'static str = "High Blood Pressure";

    pub const SEVERE_TEMPERATURE: &'static str = "Critical: Severe Temperature Abnormality";
    pub const ABNORMAL_TEMPERATURE: &'static str = "Abnormal Temperature";

    pub const CRITICAL_SYMPTOMS: &'static str = "Critical symptoms detected";
}

pub struct RecommendationText;

impl RecommendationText {
    pub const EMERGENCY: [&'static str; 2] =
        ["Seek immediate medical attention", "Call emergency services"];

    pub const HIGH_RISK: &'static str = "Schedule urgent medical consultation";

    pub const CHEST_PAIN: [&'static str; 2] = [
        "Avoid strenuous activity until evaluated",
        "Take aspirin if not contraindicated",
    ];

    pub const SHORTNESS_OF_BREATH: [&'static str; 2] = [
        "Rest in comfortable position",
        "Monitor oxygen saturation if available",
    ];

    pub const FEVER: [&'static str; 2] =
        ["Stay hydrated and rest", "Monitor temperature regularly"];

    pub const OLDER_ADULT: [&'static str; 2] = [
        "Consider lower threshold for medical evaluation",
        "Ensure medication compliance",
    ];

    pub const URGENCY_CRITICAL: [&'static str; 3] = [
        "Seek immediate emergency medical care",
        "Call emergency services if symptoms worsen",
        "Do not drive yourself to hospital",
    ];

    pub const URGENCY_HIGH: [&'static str; 3] = [
        "Seek medical evaluation within 24 hours",
        "Monitor symptoms closely",
        "Return immediately if symptoms worsen",
    ];

    pub const URGENCY_ROUTINE: [&'static str; 2] = [
        "Schedule routine medical follow-up",
        "Monitor symptoms and track patterns",
    ];

    pub const EMERGENCY_CONTACT: &'static str = "Call emergency services immediately";
}

/// Per-symptom recommendation entries, in assembly order.
pub fn symptom_recommendations(symptom: &str) -> &'static [&'static str] {
    match symptom {
        "Chest Pain" => &RecommendationText::CHEST_PAIN,
        "Shortness of Breath" => &RecommendationText::SHORTNESS_OF_BREATH,
        "Fever" => &RecommendationText::FEVER,
        _ => &[],
    }
}

/// Symptoms that carry their own recommendation entries, in assembly order.
pub const RECOMMENDATION_SYMPTOMS: [&str; 3] = ["Chest Pain", "Shortness of Breath", "Fever"];

/// Symptoms that add the critical-symptom weight to the risk score.
pub const CRITICAL_SYMPTOMS: [&str; 3] = ["Chest Pain", "Shortness of Breath", "Confusion"];
