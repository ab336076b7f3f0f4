//! Fuzzy Stress - Mamdani fuzzy inference engine for stress scoring
//!
//! Computes a stress score (0-100) from daily screen time (hours) and ambient
//! temperature (°C) through a deterministic pipeline: fuzzification → rule
//! evaluation → centroid defuzzification.
//!
//! Stateless and side-effect-free: every invocation is independent, identical
//! inputs produce bit-identical results, and calls are safe to run
//! concurrently without locking.
//!
//! ## Modules
//!
//! - **Fuzzifier**: piecewise-linear membership functions for both inputs and
//!   the stress output
//! - **Rule Engine**: fixed nine-rule Mamdani table with min firing strength
//! - **Defuzzifier**: discretized centroid-of-area over 101 sample points

pub mod defuzzifier;
pub mod encoder;
pub mod error;
pub mod fuzzifier;
pub mod pipeline;
pub mod rules;
pub mod types;

pub use defuzzifier::{Defuzzifier, NEUTRAL_SCORE};
pub use encoder::AssessmentEncoder;
pub use error::ComputeError;
pub use fuzzifier::Fuzzifier;
pub use pipeline::{assess_stress, assess_stress_checked};
pub use rules::{RuleEngine, RULES};
pub use types::{ActiveRule, AssessmentInputs, StressAssessment, StressLevel};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "fuzzy-stress";
