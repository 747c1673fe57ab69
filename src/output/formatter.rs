use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::scoring::{ApacheResult, ScoreBreakdown};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a mortality risk with one decimal place and a percent sign.
pub fn format_risk(risk: f64) -> String {
    format!("{:.1}%", risk)
}

/// Color the risk by severity band: under 10% green, under 30% yellow,
/// otherwise red.
fn paint_risk(risk: f64) -> String {
    let text = format_risk(risk);
    if risk < 10.0 {
        text.green().bold().to_string()
    } else if risk < 30.0 {
        text.yellow().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

/// Format the three subtotals, the total, and the mortality estimate as a
/// multi-line summary.
pub fn format_result(result: &ApacheResult, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}\n  Acute physiology: {}\n  Age: {}\n  Chronic health: {}\n  Total score: {}\n  Estimated hospital mortality: {}",
            "APACHE II".bold(),
            result.aps_score,
            result.age_score,
            result.chronic_health_score,
            result.total_score.bold(),
            paint_risk(result.mortality_risk)
        )
    } else {
        format!(
            "APACHE II\n  Acute physiology: {}\n  Age: {}\n  Chronic health: {}\n  Total score: {}\n  Estimated hospital mortality: {}",
            result.aps_score,
            result.age_score,
            result.chronic_health_score,
            result.total_score,
            format_risk(result.mortality_risk)
        )
    }
}

/// Format the per-parameter breakdown as an aligned table.
/// Columns: parameter, raw value, points.
pub fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let rows = breakdown
        .parameters
        .iter()
        .map(|entry| {
            let points = format!("{:>3}", entry.points);
            let points = if use_colors && entry.points > 0 {
                points.bold().to_string()
            } else {
                points
            };
            format!("  {:<24}{:>8}{}", entry.label, entry.value, points)
        })
        .collect::<Vec<_>>()
        .join("\n");

    if use_colors {
        format!("{}\n{}", "Breakdown".bold(), rows)
    } else {
        format!("Breakdown\n{}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ParameterPoints;

    fn sample_result() -> ApacheResult {
        ApacheResult {
            aps_score: 23,
            age_score: 6,
            chronic_health_score: 5,
            total_score: 34,
            mortality_risk: 75.3,
        }
    }

    #[test]
    fn test_format_risk_one_decimal() {
        assert_eq!(format_risk(3.8), "3.8%");
        assert_eq!(format_risk(75.0), "75.0%");
    }

    #[test]
    fn test_format_result_plain() {
        let output = format_result(&sample_result(), false);
        assert!(output.contains("Acute physiology: 23"));
        assert!(output.contains("Age: 6"));
        assert!(output.contains("Chronic health: 5"));
        assert!(output.contains("Total score: 34"));
        assert!(output.contains("Estimated hospital mortality: 75.3%"));
    }

    #[test]
    fn test_format_result_colored_keeps_numbers() {
        let output = format_result(&sample_result(), true);
        assert!(output.contains("34"));
        assert!(output.contains("75.3%"));
    }

    #[test]
    fn test_format_breakdown_plain() {
        let breakdown = ScoreBreakdown {
            parameters: vec![
                ParameterPoints {
                    label: "Temperature",
                    value: 36.6,
                    points: 0,
                },
                ParameterPoints {
                    label: "GCS",
                    value: 8.0,
                    points: 7,
                },
            ],
        };
        let output = format_breakdown(&breakdown, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Breakdown");
        assert!(lines[1].contains("Temperature"));
        assert!(lines[1].contains("36.6"));
        assert!(lines[2].contains("GCS"));
        assert!(lines[2].trim_end().ends_with('7'));
    }
}
