use serde::{Deserialize, Serialize};

/// The twelve acute physiology inputs, worst values from the first 24 ICU hours.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PhysiologyReading {
    /// Core temperature (degrees C)
    pub temperature: f64,
    /// Mean arterial pressure (mmHg)
    pub mean_arterial_pressure: f64,
    /// Heart rate (beats/min)
    pub heart_rate: f64,
    /// Respiratory rate (breaths/min)
    pub respiratory_rate: f64,
    /// Arterial oxygen partial pressure (mmHg), assumes FiO2 < 0.5
    pub pao2: f64,
    /// Arterial blood pH
    pub arterial_ph: f64,
    /// Serum sodium (mmol/L)
    pub sodium: f64,
    /// Serum potassium (mmol/L)
    pub potassium: f64,
    /// Serum creatinine (mg/dL)
    pub creatinine: f64,
    /// Hematocrit (%)
    pub hematocrit: f64,
    /// White blood cell count (x10^3 per mm^3)
    pub wbc: f64,
    /// Glasgow Coma Scale, 3 (worst) to 15 (normal)
    pub gcs: u32,
}

/// Patient history fields that weight the physiology score.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PatientContext {
    /// Age in years
    pub age: u32,
    /// Admitted after emergency surgery (raises the chronic-health weight
    /// and the mortality logit)
    #[serde(default)]
    pub emergency_surgery: bool,
    /// Acute renal failure doubles the creatinine sub-score
    #[serde(default)]
    pub acute_renal_failure: bool,
    #[serde(default)]
    pub chronic_health: ChronicHealth,
}

/// Chronic organ insufficiency flags. Scoring only asks whether any is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChronicHealth {
    /// Biopsy-proven cirrhosis
    #[serde(default)]
    pub liver_cirrhosis: bool,
    /// NYHA class IV heart failure
    #[serde(default)]
    pub heart_failure_class_iv: bool,
    /// Severe chronic obstructive pulmonary disease
    #[serde(default)]
    pub copd: bool,
    /// Chronic dialysis dependence
    #[serde(default)]
    pub dialysis: bool,
    /// Immunocompromised (therapy or disease)
    #[serde(default)]
    pub immunocompromised: bool,
}

impl ChronicHealth {
    pub fn any(&self) -> bool {
        self.liver_cirrhosis
            || self.heart_failure_class_iv
            || self.copd
            || self.dialysis
            || self.immunocompromised
    }
}

/// One complete, validated record for a single calculation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApacheInput {
    pub physiology: PhysiologyReading,
    pub patient: PatientContext,
}
