//! Shared record types exchanged between agents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured finding produced by a vision agent for one image.
///
/// Produced whole by the agent and never mutated afterwards; the
/// orchestrator reads the diagnosis label for validation and the report
/// renderer reads everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub agent_id: String,
    pub agent_type: String,
    pub timestamp: DateTime<Utc>,
    pub diagnosis: String,
    /// Model confidence in the 0..=1 range
    pub confidence_score: f64,
    /// "PASSED" when the reproducibility check succeeded; any other value
    /// is reported as unstable
    pub stability_check: String,
    pub stability_score: f64,
    pub tumor_size_cm: f64,
    pub tumor_location: String,
    /// Label of the saliency-map artifact; never opened by this crate
    pub explanation_path: String,
    pub model_version: String,
}

impl DiagnosticRecord {
    pub fn is_stable(&self) -> bool {
        self.stability_check == "PASSED"
    }
}

/// Reference data cross-referenced from a knowledge base for one diagnosis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub severity: String,
    #[serde(default)]
    pub common_treatments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survival_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icd_code: Option<String>,
}

impl ValidationRecord {
    /// Fallback for diagnoses the knowledge base has no entry for
    pub fn unknown() -> Self {
        Self {
            severity: "Unknown".to_string(),
            common_treatments: Vec::new(),
            survival_rate: None,
            icd_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_flag() {
        let mut record = DiagnosticRecord {
            agent_id: "vision_expert_01".to_string(),
            agent_type: "2.5D_Attention_UNet".to_string(),
            timestamp: Utc::now(),
            diagnosis: "Glioma".to_string(),
            confidence_score: 0.94,
            stability_check: "PASSED".to_string(),
            stability_score: 0.9812,
            tumor_size_cm: 2.45,
            tumor_location: "Temporal Lobe (Approximated)".to_string(),
            explanation_path: "./outputs/gradcam_heatmap.png".to_string(),
            model_version: "v1.0.0".to_string(),
        };
        assert!(record.is_stable());

        record.stability_check = "FAILED".to_string();
        assert!(!record.is_stable());
    }

    #[test]
    fn test_unknown_record_has_no_reference_data() {
        let record = ValidationRecord::unknown();
        assert_eq!(record.severity, "Unknown");
        assert!(record.common_treatments.is_empty());
        assert!(record.icd_code.is_none());
        assert!(record.survival_rate.is_none());
    }

    #[test]
    fn test_validation_record_json_omits_missing_fields() {
        let json = serde_json::to_string(&ValidationRecord::unknown()).unwrap();
        assert!(json.contains("\"severity\":\"Unknown\""));
        assert!(!json.contains("icd_code"));
    }
}
