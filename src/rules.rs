//! Rule evaluation
//!
//! This module holds the fixed nine-entry Mamdani rule table and computes the
//! firing strength of each rule from the two input membership vectors. The
//! table is process-wide constant data; rules are not user-extensible.

use crate::types::{
    ActiveRule, Rule, ScreenTimeLevel, ScreenTimeMembership, StressLevel, TemperatureLevel,
    TemperatureMembership,
};

/// The fixed rule table, one rule per (screen time, temperature) combination.
///
/// Table order is preserved in the evaluation output so diagnostic listings
/// are reproducible.
pub const RULES: [Rule; 9] = [
    Rule {
        screen_time: ScreenTimeLevel::Low,
        temperature: TemperatureLevel::Cold,
        output: StressLevel::Low,
    },
    Rule {
        screen_time: ScreenTimeLevel::Low,
        temperature: TemperatureLevel::Comfortable,
        output: StressLevel::Low,
    },
    Rule {
        screen_time: ScreenTimeLevel::Low,
        temperature: TemperatureLevel::Hot,
        output: StressLevel::Medium,
    },
    Rule {
        screen_time: ScreenTimeLevel::Medium,
        temperature: TemperatureLevel::Cold,
        output: StressLevel::Medium,
    },
    Rule {
        screen_time: ScreenTimeLevel::Medium,
        temperature: TemperatureLevel::Comfortable,
        output: StressLevel::Medium,
    },
    Rule {
        screen_time: ScreenTimeLevel::Medium,
        temperature: TemperatureLevel::Hot,
        output: StressLevel::High,
    },
    Rule {
        screen_time: ScreenTimeLevel::High,
        temperature: TemperatureLevel::Cold,
        output: StressLevel::High,
    },
    Rule {
        screen_time: ScreenTimeLevel::High,
        temperature: TemperatureLevel::Comfortable,
        output: StressLevel::High,
    },
    Rule {
        screen_time: ScreenTimeLevel::High,
        temperature: TemperatureLevel::Hot,
        output: StressLevel::High,
    },
];

/// Rule engine evaluating the fixed table against membership vectors
pub struct RuleEngine;

impl RuleEngine {
    /// Compute the active rules for the given membership vectors.
    ///
    /// Firing strength α is the min of the two antecedent degrees. Rules with
    /// α = 0 are pruned; they contribute nothing to defuzzification. Strictly
    /// greater than zero, so a rule at exactly zero never appears.
    pub fn evaluate(
        screen_time: &ScreenTimeMembership,
        temperature: &TemperatureMembership,
    ) -> Vec<ActiveRule> {
        RULES
            .iter()
            .filter_map(|rule| {
                let strength = screen_time
                    .degree(rule.screen_time)
                    .min(temperature.degree(rule.temperature));

                if strength > 0.0 {
                    Some(ActiveRule {
                        screen_time: rule.screen_time,
                        temperature: rule.temperature,
                        output: rule.output,
                        strength,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzifier::Fuzzifier;

    #[test]
    fn test_alpha_is_min_of_antecedents() {
        let screen_time = Fuzzifier::screen_time(5.5); // medium = 1.0
        let temperature = Fuzzifier::temperature(25.0); // comfortable = 0.75

        let active = RuleEngine::evaluate(&screen_time, &temperature);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].screen_time, ScreenTimeLevel::Medium);
        assert_eq!(active[0].temperature, TemperatureLevel::Comfortable);
        assert_eq!(active[0].output, StressLevel::Medium);
        assert!((active[0].strength - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_strength_rules_pruned() {
        // screen time 1h hits only "low"; temperature 24°C hits only "comfortable"
        let screen_time = Fuzzifier::screen_time(1.0);
        let temperature = Fuzzifier::temperature(24.0);

        let active = RuleEngine::evaluate(&screen_time, &temperature);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].output, StressLevel::Low);
        assert_eq!(active[0].strength, 1.0);
    }

    #[test]
    fn test_all_zero_vector_empties_active_set() {
        let screen_time = ScreenTimeMembership {
            low: 0.0,
            medium: 0.0,
            high: 0.0,
        };
        let temperature = Fuzzifier::temperature(24.0);

        let active = RuleEngine::evaluate(&screen_time, &temperature);
        assert!(active.is_empty());
    }

    #[test]
    fn test_overlapping_inputs_fire_multiple_rules() {
        // screen time 3.5h: low = 0.25, medium = 0.2; temperature 21°C:
        // cold = 0.25, comfortable = 0.25 — four rules fire
        let screen_time = Fuzzifier::screen_time(3.5);
        let temperature = Fuzzifier::temperature(21.0);

        let active = RuleEngine::evaluate(&screen_time, &temperature);

        assert_eq!(active.len(), 4);
        for rule in &active {
            assert!(rule.strength > 0.0 && rule.strength <= 1.0);
        }
    }

    #[test]
    fn test_table_order_preserved() {
        let screen_time = Fuzzifier::screen_time(3.5);
        let temperature = Fuzzifier::temperature(21.0);

        let active = RuleEngine::evaluate(&screen_time, &temperature);

        // active rules appear in the same relative order as in RULES
        let positions: Vec<usize> = active
            .iter()
            .map(|a| {
                RULES
                    .iter()
                    .position(|r| {
                        r.screen_time == a.screen_time && r.temperature == a.temperature
                    })
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
