//! Clinical report synthesis
//!
//! Pure formatting: combines a diagnostic finding and its validation record
//! into the fixed-layout text block shown to stakeholders. The layout has
//! no external consumers and is not a wire contract.

use crate::agents::{DiagnosticRecord, ValidationRecord};

const STABLE_MARKER: &str = "✅ Stable";
const UNSTABLE_MARKER: &str = "⚠️ Unstable";

/// Render a confidence score in 0..=1 as a percentage with one decimal
pub fn confidence_pct(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn stability_label(diagnostic: &DiagnosticRecord) -> &'static str {
    if diagnostic.is_stable() {
        STABLE_MARKER
    } else {
        UNSTABLE_MARKER
    }
}

/// Combine both agent outputs into the final report text
pub fn synthesize(diagnostic: &DiagnosticRecord, validation: &ValidationRecord) -> String {
    let treatments = if validation.common_treatments.is_empty() {
        "N/A".to_string()
    } else {
        validation.common_treatments.join(", ")
    };

    format!(
        "\n\
╔══════════════════════════════════════════════════════════════╗\n\
║           AUTOMATED PRELIMINARY DIAGNOSTIC REPORT            ║\n\
╠══════════════════════════════════════════════════════════════╣\n\
║  Date:  {date}\n\
║  Agent: {agent_id} ({model_version})\n\
╠══════════════════════════════════════════════════════════════╣\n\
║                       PRIMARY FINDING                        ║\n\
╠══════════════════════════════════════════════════════════════╣\n\
║  Diagnosis: {diagnosis}\n\
║  Location:  {location}\n\
║  Size:      {size} cm\n\
╠══════════════════════════════════════════════════════════════╣\n\
║                        AI CONFIDENCE                         ║\n\
╠══════════════════════════════════════════════════════════════╣\n\
║  Confidence Score:  {confidence}\n\
║  Stability Check:   {stability}\n\
║  Stability Score:   {stability_score}\n\
╠══════════════════════════════════════════════════════════════╣\n\
║                  KNOWLEDGE GRAPH VALIDATION                  ║\n\
╠══════════════════════════════════════════════════════════════╣\n\
║  Severity Level:    {severity}\n\
║  ICD-10 Code:       {icd}\n\
║  Common Treatments: {treatments}\n\
╠══════════════════════════════════════════════════════════════╣\n\
║                          NEXT STEPS                          ║\n\
╠══════════════════════════════════════════════════════════════╣\n\
║  1. Review saliency map: {explanation}\n\
║  2. Consult with a specialist for confirmation\n\
║  3. Schedule follow-up imaging if required\n\
╚══════════════════════════════════════════════════════════════╝\n\
\n\
DISCLAIMER: This is an AI-assisted preliminary analysis.\n\
Final diagnosis must be confirmed by a qualified physician.\n",
        date = diagnostic.timestamp.format("%Y-%m-%d %H:%M:%S"),
        agent_id = diagnostic.agent_id,
        model_version = diagnostic.model_version,
        diagnosis = diagnostic.diagnosis.to_uppercase(),
        location = diagnostic.tumor_location,
        size = diagnostic.tumor_size_cm,
        confidence = confidence_pct(diagnostic.confidence_score),
        stability = stability_label(diagnostic),
        stability_score = diagnostic.stability_score,
        severity = validation.severity,
        icd = validation.icd_code.as_deref().unwrap_or("N/A"),
        treatments = treatments,
        explanation = diagnostic.explanation_path,
    )
}
