//! Point-lookup tables for the twelve acute physiology parameters, plus age.
//!
//! Each table is an ordered list of `(threshold, points)` rows taken from
//! Knaus WA, et al. "APACHE II: a severity of disease classification
//! system." Critical Care Medicine, 1985. Rows are scanned top to bottom
//! and the first row the value meets (>=) wins, so a shared boundary always
//! resolves to the row listed first. Values below every row fall through to
//! the table's floor score. Both extremes of a parameter score high; the
//! U-shape is intentional.

const TEMPERATURE: &[(f64, u32)] = &[
    (41.0, 4),
    (39.0, 3),
    (38.5, 1),
    (36.0, 0),
    (34.0, 1),
    (32.0, 2),
    (30.0, 3),
];

const MEAN_ARTERIAL_PRESSURE: &[(f64, u32)] =
    &[(160.0, 4), (130.0, 3), (110.0, 2), (70.0, 0), (50.0, 2)];

const HEART_RATE: &[(f64, u32)] = &[
    (180.0, 4),
    (140.0, 3),
    (110.0, 2),
    (70.0, 0),
    (55.0, 2),
    (40.0, 3),
];

const RESPIRATORY_RATE: &[(f64, u32)] = &[
    (50.0, 4),
    (35.0, 3),
    (25.0, 1),
    (12.0, 0),
    (10.0, 1),
    (6.0, 2),
];

const ARTERIAL_PH: &[(f64, u32)] = &[
    (7.7, 4),
    (7.6, 3),
    (7.5, 1),
    (7.33, 0),
    (7.25, 2),
    (7.15, 3),
];

const SODIUM: &[(f64, u32)] = &[
    (180.0, 4),
    (160.0, 3),
    (155.0, 2),
    (150.0, 1),
    (130.0, 0),
    (120.0, 2),
    (111.0, 3),
];

const POTASSIUM: &[(f64, u32)] = &[
    (7.0, 4),
    (6.0, 3),
    (5.5, 1),
    (3.5, 0),
    (3.0, 1),
    (2.5, 2),
];

const CREATININE: &[(f64, u32)] = &[(3.5, 4), (2.0, 3), (1.5, 2), (0.6, 0)];

const HEMATOCRIT: &[(f64, u32)] = &[(60.0, 4), (50.0, 2), (46.0, 1), (30.0, 0), (20.0, 2)];

const WBC: &[(f64, u32)] = &[(40.0, 4), (20.0, 2), (15.0, 1), (3.0, 0), (1.0, 2)];

/// First row whose threshold the value meets wins; below all rows, `floor`.
fn step_points(value: f64, rows: &[(f64, u32)], floor: u32) -> u32 {
    for &(threshold, points) in rows {
        if value >= threshold {
            return points;
        }
    }
    floor
}

pub fn temperature_points(celsius: f64) -> u32 {
    step_points(celsius, TEMPERATURE, 4)
}

pub fn mean_arterial_pressure_points(mmhg: f64) -> u32 {
    step_points(mmhg, MEAN_ARTERIAL_PRESSURE, 4)
}

pub fn heart_rate_points(bpm: f64) -> u32 {
    step_points(bpm, HEART_RATE, 4)
}

pub fn respiratory_rate_points(breaths_per_min: f64) -> u32 {
    step_points(breaths_per_min, RESPIRATORY_RATE, 4)
}

/// Two-tier oxygenation: PaO2 only, assuming FiO2 < 0.5.
/// The top tier is strict (>70), unlike every other boundary in the system.
pub fn pao2_points(mmhg: f64) -> u32 {
    if mmhg > 70.0 {
        0
    } else if mmhg >= 61.0 {
        1
    } else if mmhg >= 55.0 {
        3
    } else {
        4
    }
}

pub fn arterial_ph_points(ph: f64) -> u32 {
    step_points(ph, ARTERIAL_PH, 4)
}

pub fn sodium_points(mmol_per_l: f64) -> u32 {
    step_points(mmol_per_l, SODIUM, 4)
}

pub fn potassium_points(mmol_per_l: f64) -> u32 {
    step_points(mmol_per_l, POTASSIUM, 4)
}

/// Base creatinine score. Acute renal failure doubling happens in the
/// engine, not here.
pub fn creatinine_points(mg_per_dl: f64) -> u32 {
    step_points(mg_per_dl, CREATININE, 2)
}

pub fn hematocrit_points(percent: f64) -> u32 {
    step_points(percent, HEMATOCRIT, 4)
}

pub fn wbc_points(thousands_per_mm3: f64) -> u32 {
    step_points(thousands_per_mm3, WBC, 4)
}

/// GCS has no table: points = 15 - GCS, giving 0 (alert) to 12 (deep coma).
/// Saturates so an out-of-scale value still yields a number.
pub fn gcs_points(gcs: u32) -> u32 {
    15u32.saturating_sub(gcs)
}

pub fn age_points(age: u32) -> u32 {
    if age >= 75 {
        6
    } else if age >= 65 {
        5
    } else if age >= 55 {
        3
    } else if age >= 45 {
        2
    } else {
        0
    }
}
