//! Defuzzification
//!
//! Discretized centroid-of-area over the [0,100] stress domain. Each rule's
//! consequent is clipped at the rule's firing strength (Mamdani min
//! implication) and the clipped sets are combined pointwise by max before the
//! centroid is accumulated.
//!
//! The sampling grid is fixed at the 101 integer points of the output range,
//! so results are reproducible bit-for-bit for identical inputs.

use crate::fuzzifier::Fuzzifier;
use crate::types::ActiveRule;

/// Lower bound of the stress output domain
pub const OUTPUT_MIN: u32 = 0;

/// Upper bound of the stress output domain (inclusive)
pub const OUTPUT_MAX: u32 = 100;

/// Score returned when no aggregated membership mass exists.
///
/// Midpoint of the output range. Returned explicitly for an empty active-rule
/// set and when the accumulated denominator is exactly zero; never the result
/// of a division.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Centroid defuzzifier for the stress output variable
pub struct Defuzzifier;

impl Defuzzifier {
    /// Collapse the active-rule set into one crisp score in [0,100].
    pub fn centroid(active_rules: &[ActiveRule]) -> f64 {
        if active_rules.is_empty() {
            return NEUTRAL_SCORE;
        }

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for z in OUTPUT_MIN..=OUTPUT_MAX {
            let z = f64::from(z);

            let mut aggregated: f64 = 0.0;
            for rule in active_rules {
                let clipped = rule.strength.min(Fuzzifier::stress(rule.output, z));
                aggregated = aggregated.max(clipped);
            }

            numerator += z * aggregated;
            denominator += aggregated;
        }

        if denominator == 0.0 {
            NEUTRAL_SCORE
        } else {
            numerator / denominator
        }
    }
}
