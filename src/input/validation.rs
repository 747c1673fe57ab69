use super::record::ApacheInput;

/// Accepted clinical range for one input field.
///
/// The scorer itself is total on any numbers it is handed; these bounds
/// exist to catch transcription mistakes before a record reaches it.
pub struct FieldRule {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    value: fn(&ApacheInput) -> f64,
}

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: "physiology.temperature",
        min: 20.0,
        max: 46.0,
        value: |i| i.physiology.temperature,
    },
    FieldRule {
        field: "physiology.mean_arterial_pressure",
        min: 20.0,
        max: 300.0,
        value: |i| i.physiology.mean_arterial_pressure,
    },
    FieldRule {
        field: "physiology.heart_rate",
        min: 10.0,
        max: 300.0,
        value: |i| i.physiology.heart_rate,
    },
    FieldRule {
        field: "physiology.respiratory_rate",
        min: 0.0,
        max: 100.0,
        value: |i| i.physiology.respiratory_rate,
    },
    FieldRule {
        field: "physiology.pao2",
        min: 0.0,
        max: 800.0,
        value: |i| i.physiology.pao2,
    },
    FieldRule {
        field: "physiology.arterial_ph",
        min: 6.5,
        max: 8.0,
        value: |i| i.physiology.arterial_ph,
    },
    FieldRule {
        field: "physiology.sodium",
        min: 100.0,
        max: 200.0,
        value: |i| i.physiology.sodium,
    },
    FieldRule {
        field: "physiology.potassium",
        min: 1.0,
        max: 15.0,
        value: |i| i.physiology.potassium,
    },
    FieldRule {
        field: "physiology.creatinine",
        min: 0.0,
        max: 30.0,
        value: |i| i.physiology.creatinine,
    },
    FieldRule {
        field: "physiology.hematocrit",
        min: 5.0,
        max: 80.0,
        value: |i| i.physiology.hematocrit,
    },
    FieldRule {
        field: "physiology.wbc",
        min: 0.0,
        max: 200.0,
        value: |i| i.physiology.wbc,
    },
    FieldRule {
        field: "physiology.gcs",
        min: 3.0,
        max: 15.0,
        value: |i| i.physiology.gcs as f64,
    },
    FieldRule {
        field: "patient.age",
        min: 18.0,
        max: 130.0,
        value: |i| i.patient.age as f64,
    },
];

/// Check every field against its clinical range.
/// Returns all violations at once (not just the first).
pub fn validate_record(input: &ApacheInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for rule in RULES {
        let value = (rule.value)(input);
        if !value.is_finite() {
            errors.push(format!("{}: value is not a finite number", rule.field));
        } else if value < rule.min || value > rule.max {
            errors.push(format!(
                "{}: {} is outside the accepted range {}..={}",
                rule.field, value, rule.min, rule.max
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
