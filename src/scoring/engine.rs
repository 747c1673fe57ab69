use serde::Serialize;

use super::tables;
use crate::input::record::{ApacheInput, PatientContext};

// Hospital-mortality logistic regression from the 1985 validation cohort,
// without the diagnostic-category weight (that term needs an ICD diagnosis
// this model does not collect).
const LOGIT_INTERCEPT: f64 = -3.517;
const LOGIT_PER_POINT: f64 = 0.146;
const LOGIT_EMERGENCY_SURGERY: f64 = 0.603;

/// One physiology parameter's contribution to the APS.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterPoints {
    pub label: &'static str, // e.g. "Temperature", "Creatinine"
    pub value: f64,          // Raw input value
    pub points: u32,         // After renal-failure doubling, for creatinine
}

/// Per-parameter view of how the APS was reached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub parameters: Vec<ParameterPoints>,
}

/// The three subtotals, their sum, and the estimated hospital mortality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApacheResult {
    pub aps_score: u32,
    pub age_score: u32,
    pub chronic_health_score: u32,
    pub total_score: u32,
    /// Percentage, rounded to one decimal place
    pub mortality_risk: f64,
}

/// An [`ApacheResult`] together with its breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub result: ApacheResult,
    pub breakdown: ScoreBreakdown,
}

/// Score a record. Total on any numeric input: out-of-clinical-range values
/// fall through to the extreme rows of the lookup tables rather than
/// erroring, so range checking belongs to the caller.
pub fn calculate(input: &ApacheInput) -> ApacheResult {
    calculate_with_breakdown(input).result
}

/// Score a record and keep the per-parameter contributions for display.
pub fn calculate_with_breakdown(input: &ApacheInput) -> ScoredRecord {
    let p = &input.physiology;

    let mut creatinine_points = tables::creatinine_points(p.creatinine);
    if input.patient.acute_renal_failure {
        creatinine_points *= 2;
    }

    let parameters = vec![
        ParameterPoints {
            label: "Temperature",
            value: p.temperature,
            points: tables::temperature_points(p.temperature),
        },
        ParameterPoints {
            label: "Mean arterial pressure",
            value: p.mean_arterial_pressure,
            points: tables::mean_arterial_pressure_points(p.mean_arterial_pressure),
        },
        ParameterPoints {
            label: "Heart rate",
            value: p.heart_rate,
            points: tables::heart_rate_points(p.heart_rate),
        },
        ParameterPoints {
            label: "Respiratory rate",
            value: p.respiratory_rate,
            points: tables::respiratory_rate_points(p.respiratory_rate),
        },
        ParameterPoints {
            label: "PaO2",
            value: p.pao2,
            points: tables::pao2_points(p.pao2),
        },
        ParameterPoints {
            label: "Arterial pH",
            value: p.arterial_ph,
            points: tables::arterial_ph_points(p.arterial_ph),
        },
        ParameterPoints {
            label: "Sodium",
            value: p.sodium,
            points: tables::sodium_points(p.sodium),
        },
        ParameterPoints {
            label: "Potassium",
            value: p.potassium,
            points: tables::potassium_points(p.potassium),
        },
        ParameterPoints {
            label: "Creatinine",
            value: p.creatinine,
            points: creatinine_points,
        },
        ParameterPoints {
            label: "Hematocrit",
            value: p.hematocrit,
            points: tables::hematocrit_points(p.hematocrit),
        },
        ParameterPoints {
            label: "WBC",
            value: p.wbc,
            points: tables::wbc_points(p.wbc),
        },
        ParameterPoints {
            label: "GCS",
            value: p.gcs as f64,
            points: tables::gcs_points(p.gcs),
        },
    ];

    let aps_score: u32 = parameters.iter().map(|entry| entry.points).sum();
    let age_score = tables::age_points(input.patient.age);
    let chronic_health_score = chronic_health_points(&input.patient);
    let total_score = aps_score + age_score + chronic_health_score;
    let mortality_risk = mortality_risk(total_score, input.patient.emergency_surgery);

    ScoredRecord {
        result: ApacheResult {
            aps_score,
            age_score,
            chronic_health_score,
            total_score,
            mortality_risk,
        },
        breakdown: ScoreBreakdown { parameters },
    }
}

/// Chronic organ insufficiency weight: 5 after emergency surgery, 2
/// otherwise. The full APACHE II table also gives 5 to non-operative
/// admissions; this model folds those into the 2-point bucket, a documented
/// approximation kept as-is.
fn chronic_health_points(patient: &PatientContext) -> u32 {
    if !patient.chronic_health.any() {
        return 0;
    }
    if patient.emergency_surgery {
        5
    } else {
        2
    }
}

/// Hospital mortality as a percentage, rounded to one decimal place.
pub fn mortality_risk(total_score: u32, emergency_surgery: bool) -> f64 {
    let risk = 100.0 * logistic_risk(total_score, emergency_surgery);
    (risk * 10.0).round() / 10.0
}

fn logistic_risk(total_score: u32, emergency_surgery: bool) -> f64 {
    let logit = LOGIT_INTERCEPT
        + LOGIT_PER_POINT * total_score as f64
        + if emergency_surgery {
            LOGIT_EMERGENCY_SURGERY
        } else {
            0.0
        };
    let odds = logit.exp();
    odds / (1.0 + odds)
}
