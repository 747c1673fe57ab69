pub mod record;
pub mod validation;

pub use record::{ApacheInput, ChronicHealth, PatientContext, PhysiologyReading};
pub use validation::validate_record;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Starter record with unremarkable adult values; every field the scorer reads.
pub const TEMPLATE: &str = "\
# apache2-score patient record
# Enter the worst values from the first 24 ICU hours.
physiology:
  temperature: 36.6            # degrees C, core
  mean_arterial_pressure: 90.0 # mmHg
  heart_rate: 80.0             # beats/min
  respiratory_rate: 16.0       # breaths/min
  pao2: 95.0                   # mmHg, arterial (FiO2 < 0.5)
  arterial_ph: 7.4
  sodium: 140.0                # mmol/L
  potassium: 4.0               # mmol/L
  creatinine: 1.0              # mg/dL
  hematocrit: 40.0             # percent
  wbc: 10.0                    # x10^3 per mm^3
  gcs: 15                      # Glasgow Coma Scale, 3-15
patient:
  age: 45
  emergency_surgery: false
  acute_renal_failure: false
  chronic_health:
    liver_cirrhosis: false
    heart_failure_class_iv: false
    copd: false
    dialysis: false
    immunocompromised: false
";

/// Load a patient record from a YAML or JSON file.
///
/// # Arguments
///
/// * `path` - Path to the record. `.json` files parse as JSON, everything
///   else as YAML. `-` or no path reads YAML from stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the record cannot be
/// parsed. Clinical range checking is separate, see [`validate_record`].
pub fn load_record(path: Option<PathBuf>) -> Result<ApacheInput> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read record at {}", path.display()))?;
            parse_record(&content, is_json(&path))
                .with_context(|| format!("Failed to parse record at {}", path.display()))
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read record from stdin")?;
            parse_record(&content, false).context("Failed to parse record from stdin")
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_record(content: &str, json: bool) -> Result<ApacheInput> {
    if json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_saphyr::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_and_validates() {
        let input = parse_record(TEMPLATE, false).unwrap();
        assert!(validate_record(&input).is_ok());
        assert_eq!(input.patient.age, 45);
        assert_eq!(input.physiology.gcs, 15);
    }

    #[test]
    fn test_parse_json_record() {
        let json = r#"{
            "physiology": {
                "temperature": 36.6,
                "mean_arterial_pressure": 90.0,
                "heart_rate": 80.0,
                "respiratory_rate": 16.0,
                "pao2": 95.0,
                "arterial_ph": 7.4,
                "sodium": 140.0,
                "potassium": 4.0,
                "creatinine": 1.0,
                "hematocrit": 40.0,
                "wbc": 10.0,
                "gcs": 15
            },
            "patient": {
                "age": 72,
                "emergency_surgery": true,
                "acute_renal_failure": false,
                "chronic_health": { "copd": true }
            }
        }"#;
        let input = parse_record(json, true).unwrap();
        assert_eq!(input.patient.age, 72);
        assert!(input.patient.emergency_surgery);
        assert!(input.patient.chronic_health.any());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_record("physiology: [not, a, record]", false).is_err());
    }

    #[test]
    fn test_is_json_by_extension() {
        assert!(is_json(Path::new("record.json")));
        assert!(is_json(Path::new("record.JSON")));
        assert!(!is_json(Path::new("record.yaml")));
        assert!(!is_json(Path::new("-")));
    }
}
