//! Core types for the fuzzy stress pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: membership vectors, rules, active rules, and the assessment result.
//!
//! Linguistic levels keep the product's original Indonesian names on the wire
//! (`rendah`/`sedang`/`tinggi`, `dingin`/`nyaman`/`panas`) while the Rust API
//! uses English variant names.

use serde::{Deserialize, Serialize};

/// Linguistic level for the screen-time input variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenTimeLevel {
    #[serde(rename = "rendah")]
    Low,
    #[serde(rename = "sedang")]
    Medium,
    #[serde(rename = "tinggi")]
    High,
}

impl ScreenTimeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenTimeLevel::Low => "rendah",
            ScreenTimeLevel::Medium => "sedang",
            ScreenTimeLevel::High => "tinggi",
        }
    }
}

/// Linguistic level for the temperature input variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureLevel {
    #[serde(rename = "dingin")]
    Cold,
    #[serde(rename = "nyaman")]
    Comfortable,
    #[serde(rename = "panas")]
    Hot,
}

impl TemperatureLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureLevel::Cold => "dingin",
            TemperatureLevel::Comfortable => "nyaman",
            TemperatureLevel::Hot => "panas",
        }
    }
}

/// Linguistic level for the stress output variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    #[serde(rename = "rendah")]
    Low,
    #[serde(rename = "sedang")]
    Medium,
    #[serde(rename = "tinggi")]
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "rendah",
            StressLevel::Medium => "sedang",
            StressLevel::High => "tinggi",
        }
    }

    /// Display label used in the `category` field of the assessment
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Rendah",
            StressLevel::Medium => "Sedang",
            StressLevel::High => "Tinggi",
        }
    }

    /// Map a crisp score to its level.
    ///
    /// Fixed thresholds: below 35 is low, below 65 is medium, otherwise high.
    pub fn from_score(score: f64) -> Self {
        if score < 35.0 {
            StressLevel::Low
        } else if score < 65.0 {
            StressLevel::Medium
        } else {
            StressLevel::High
        }
    }
}

/// Membership vector for the screen-time variable.
///
/// Every declared level is present, even at degree 0. Degrees are in [0,1];
/// overlapping levels may sum to more or less than 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeMembership {
    #[serde(rename = "rendah")]
    pub low: f64,
    #[serde(rename = "sedang")]
    pub medium: f64,
    #[serde(rename = "tinggi")]
    pub high: f64,
}

impl ScreenTimeMembership {
    /// Degree of membership in the given level
    pub fn degree(&self, level: ScreenTimeLevel) -> f64 {
        match level {
            ScreenTimeLevel::Low => self.low,
            ScreenTimeLevel::Medium => self.medium,
            ScreenTimeLevel::High => self.high,
        }
    }
}

/// Membership vector for the temperature variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureMembership {
    #[serde(rename = "dingin")]
    pub cold: f64,
    #[serde(rename = "nyaman")]
    pub comfortable: f64,
    #[serde(rename = "panas")]
    pub hot: f64,
}

impl TemperatureMembership {
    /// Degree of membership in the given level
    pub fn degree(&self, level: TemperatureLevel) -> f64 {
        match level {
            TemperatureLevel::Cold => self.cold,
            TemperatureLevel::Comfortable => self.comfortable,
            TemperatureLevel::Hot => self.hot,
        }
    }
}

/// One entry of the fixed rule table: if screen time is `screen_time` and
/// temperature is `temperature`, then stress is `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub screen_time: ScreenTimeLevel,
    pub temperature: TemperatureLevel,
    pub output: StressLevel,
}

/// A rule that fired, together with its firing strength.
///
/// Wire field names (`st`, `temp`, `output`, `condition`) match the original
/// server response format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveRule {
    #[serde(rename = "st")]
    pub screen_time: ScreenTimeLevel,
    #[serde(rename = "temp")]
    pub temperature: TemperatureLevel,
    pub output: StressLevel,
    /// Firing strength α, min of the two antecedent degrees; always in (0,1]
    #[serde(rename = "condition")]
    pub strength: f64,
}

/// The two input membership vectors, kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputMemberships {
    pub screentime: ScreenTimeMembership,
    pub temperature: TemperatureMembership,
}

/// Result of one stress assessment.
///
/// Immutable per-invocation record; nothing persists between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAssessment {
    /// Crisp defuzzified score in [0,100]
    #[serde(rename = "stress_value")]
    pub score: f64,
    /// Display label for the score's level ("Rendah"/"Sedang"/"Tinggi")
    pub category: String,
    /// Rules with α > 0, in rule-table order
    pub active_rules: Vec<ActiveRule>,
    /// Input membership vectors
    pub memberships: InputMemberships,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Raw inputs echoed back in the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInputs {
    pub screen_time_hours: f64,
    pub temperature_c: f64,
}

/// Complete report payload for the serving boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub inputs: AssessmentInputs,
    pub assessment: StressAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_score_thresholds() {
        assert_eq!(StressLevel::from_score(0.0), StressLevel::Low);
        assert_eq!(StressLevel::from_score(34.9), StressLevel::Low);
        assert_eq!(StressLevel::from_score(35.0), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(64.9), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(65.0), StressLevel::High);
        assert_eq!(StressLevel::from_score(100.0), StressLevel::High);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(StressLevel::Low.label(), "Rendah");
        assert_eq!(StressLevel::Medium.label(), "Sedang");
        assert_eq!(StressLevel::High.label(), "Tinggi");
    }

    #[test]
    fn test_active_rule_wire_format() {
        let rule = ActiveRule {
            screen_time: ScreenTimeLevel::Medium,
            temperature: TemperatureLevel::Comfortable,
            output: StressLevel::Medium,
            strength: 0.75,
        };

        let json = serde_json::to_value(rule).unwrap();
        assert_eq!(json["st"], "sedang");
        assert_eq!(json["temp"], "nyaman");
        assert_eq!(json["output"], "sedang");
        assert_eq!(json["condition"], 0.75);
    }

    #[test]
    fn test_membership_wire_names() {
        let membership = ScreenTimeMembership {
            low: 1.0,
            medium: 0.0,
            high: 0.0,
        };

        let json = serde_json::to_value(membership).unwrap();
        assert_eq!(json["rendah"], 1.0);
        assert_eq!(json["sedang"], 0.0);
        assert_eq!(json["tinggi"], 0.0);
    }
}
