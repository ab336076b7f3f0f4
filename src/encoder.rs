//! Report encoding
//!
//! This module wraps a stress assessment into a versioned report payload with
//! producer and timing metadata, ready for a serving boundary to forward
//! verbatim. The assessment body keeps the original server's response shape
//! (`stress_value`, `category`, `active_rules`, `memberships`).

use crate::error::ComputeError;
use crate::types::{AssessmentInputs, AssessmentReport, ReportProducer, StressAssessment};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Encoder for producing assessment report payloads
pub struct AssessmentEncoder {
    instance_id: String,
}

impl Default for AssessmentEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap an assessment into a report payload
    pub fn encode(&self, inputs: AssessmentInputs, assessment: StressAssessment) -> AssessmentReport {
        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        AssessmentReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            computed_at_utc: Utc::now().to_rfc3339(),
            inputs,
            assessment,
        }
    }

    /// Encode to a JSON string
    pub fn encode_to_json(
        &self,
        inputs: AssessmentInputs,
        assessment: StressAssessment,
    ) -> Result<String, ComputeError> {
        let report = self.encode(inputs, assessment);
        serde_json::to_string_pretty(&report).map_err(ComputeError::JsonError)
    }
}
