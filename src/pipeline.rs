//! Pipeline orchestration
//!
//! Public entry points for the crate. Strings the three stages together:
//! fuzzification → rule evaluation → centroid defuzzification, then labels the
//! score and packages the intermediate artifacts for diagnostics.
//!
//! Every call is independent and referentially transparent; identical inputs
//! yield bit-identical results.

use crate::defuzzifier::Defuzzifier;
use crate::error::ComputeError;
use crate::fuzzifier::Fuzzifier;
use crate::rules::RuleEngine;
use crate::types::{InputMemberships, StressAssessment, StressLevel};

/// Compute a stress assessment from crisp inputs.
///
/// Total function: membership functions cover all reals, so any finite input
/// produces a result. Callers holding raw request parameters should prefer
/// [`assess_stress_checked`], which rejects non-finite values first.
///
/// # Example
/// ```
/// use fuzzy_stress::assess_stress;
///
/// let assessment = assess_stress(5.5, 25.0);
/// assert_eq!(assessment.category, "Sedang");
/// ```
pub fn assess_stress(screen_time_hours: f64, temperature_c: f64) -> StressAssessment {
    let screentime = Fuzzifier::screen_time(screen_time_hours);
    let temperature = Fuzzifier::temperature(temperature_c);

    let active_rules = RuleEngine::evaluate(&screentime, &temperature);
    let score = Defuzzifier::centroid(&active_rules);
    let level = StressLevel::from_score(score);

    StressAssessment {
        score,
        category: level.label().to_string(),
        active_rules,
        memberships: InputMemberships {
            screentime,
            temperature,
        },
    }
}

/// Serving-boundary entry point: validate raw inputs, then assess.
///
/// Rejects NaN and infinite values with [`ComputeError::InvalidInput`] so the
/// caller can fail the request as a client error before the core runs. Range
/// checking beyond finiteness is not needed; the membership functions are
/// total.
pub fn assess_stress_checked(
    screen_time_hours: f64,
    temperature_c: f64,
) -> Result<StressAssessment, ComputeError> {
    if !screen_time_hours.is_finite() {
        return Err(ComputeError::InvalidInput(format!(
            "screen_time_hours must be finite, got {screen_time_hours}"
        )));
    }
    if !temperature_c.is_finite() {
        return Err(ComputeError::InvalidInput(format!(
            "temperature_c must be finite, got {temperature_c}"
        )));
    }

    Ok(assess_stress(screen_time_hours, temperature_c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScreenTimeLevel, ScreenTimeMembership, TemperatureLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_reference_case() {
        // screen time 5.5h sits at the medium peak; 25°C is comfortable at 0.75
        let assessment = assess_stress(5.5, 25.0);

        assert_eq!(assessment.memberships.screentime.medium, 1.0);
        assert_eq!(assessment.memberships.temperature.comfortable, 0.75);

        assert_eq!(assessment.active_rules.len(), 1);
        let rule = &assessment.active_rules[0];
        assert_eq!(rule.screen_time, ScreenTimeLevel::Medium);
        assert_eq!(rule.temperature, TemperatureLevel::Comfortable);
        assert!((rule.strength - 0.75).abs() < 1e-12);

        assert!((35.0..65.0).contains(&assessment.score));
        assert_eq!(assessment.category, "Sedang");
    }

    #[test]
    fn test_low_inputs_score_low() {
        let assessment = assess_stress(1.0, 24.0);
        assert!(assessment.score < 35.0);
        assert_eq!(assessment.category, "Rendah");
    }

    #[test]
    fn test_high_inputs_score_high() {
        let assessment = assess_stress(11.0, 31.0);
        assert!(assessment.score >= 65.0);
        assert_eq!(assessment.category, "Tinggi");
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let first = assess_stress(6.2, 21.3);
        let second = assess_stress(6.2, 21.3);
        assert_eq!(first, second);

        // bit-identical through serialization too
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_monotonic_on_high_ramp() {
        // raising screen time across the "high" ramp never lowers the score
        let mut previous = assess_stress(7.0, 24.0).score;
        for step in 1..=30 {
            let hours = 7.0 + f64::from(step) * 0.1;
            let score = assess_stress(hours, 24.0).score;
            assert!(
                score >= previous - 1e-9,
                "score dropped from {previous} to {score} at {hours}h"
            );
            previous = score;
        }
    }

    #[test]
    fn test_empty_active_set_defaults_neutral() {
        // an all-zero vector is impossible through the fuzzifier (the shapes
        // cover the whole axis), so build one directly the way a different
        // variable configuration could produce it
        let screentime = ScreenTimeMembership {
            low: 0.0,
            medium: 0.0,
            high: 0.0,
        };
        let temperature = Fuzzifier::temperature(24.0);

        let active_rules = RuleEngine::evaluate(&screentime, &temperature);
        assert!(active_rules.is_empty());

        let score = Defuzzifier::centroid(&active_rules);
        assert_eq!(score, 50.0);
        assert_eq!(StressLevel::from_score(score).label(), "Sedang");
    }

    #[test]
    fn test_checked_rejects_non_finite() {
        assert!(assess_stress_checked(f64::NAN, 24.0).is_err());
        assert!(assess_stress_checked(5.0, f64::INFINITY).is_err());
        assert!(assess_stress_checked(f64::NEG_INFINITY, 24.0).is_err());
        assert!(assess_stress_checked(5.0, 24.0).is_ok());
    }
}
