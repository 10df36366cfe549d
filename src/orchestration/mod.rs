//! Request orchestration
//!
//! The orchestrator is the central manager of the pipeline: it routes an
//! incoming request, sequences the vision and validation agents, and
//! synthesizes their outputs into the final report. Agents run strictly one
//! after the other; there is no fan-out.

pub mod report;

use crate::agents::{
    create_knowledge_base, create_vision_agent, DiagnosticRecord, KnowledgeBase,
    ValidationRecord, VisionAgent,
};
use crate::config::Config;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Returned when a request arrives without an image to analyze
pub const MISSING_IMAGE_WARNING: &str = "Please provide an MRI image for analysis.";

/// One completed analysis, kept for the session summary
#[derive(Debug, Clone)]
pub struct Exchange {
    pub query: String,
    pub diagnosis: String,
    pub completed_at: DateTime<Utc>,
}

pub struct Orchestrator {
    vision: Arc<dyn VisionAgent>,
    knowledge: Arc<dyn KnowledgeBase>,
    synthesis_latency: Duration,
    history: Vec<Exchange>,
}

impl Orchestrator {
    pub fn new(
        vision: Arc<dyn VisionAgent>,
        knowledge: Arc<dyn KnowledgeBase>,
        synthesis_latency: Duration,
    ) -> Self {
        Self {
            vision,
            knowledge,
            synthesis_latency,
            history: Vec::new(),
        }
    }

    /// Build an orchestrator with the agents named in the config
    pub fn from_config(config: &Config) -> Result<Self> {
        let vision = create_vision_agent(&config.orchestrator.vision_agent, config)?;
        let knowledge = create_knowledge_base(&config.orchestrator.knowledge_base, config)?;
        Ok(Self::new(
            vision,
            knowledge,
            config.orchestrator.synthesis_latency(),
        ))
    }

    /// Completed analyses in this session, oldest first
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    /// Main entry point for user requests
    ///
    /// Requests without an image are answered with a fixed warning and no
    /// agent is invoked. Otherwise the pipeline runs end to end and the
    /// rendered report is returned.
    pub async fn process_request(&mut self, query: &str, image: Option<&str>) -> Result<String> {
        let Some(image) = image else {
            tracing::warn!(query, "request has no image attached; nothing to route");
            return Ok(MISSING_IMAGE_WARNING.to_string());
        };

        let (diagnostic, validation) = self.run_pipeline(query, image).await?;

        // Simulate the synthesis "thinking" phase
        tokio::time::sleep(self.synthesis_latency).await;

        Ok(report::synthesize(&diagnostic, &validation))
    }

    /// Run the agent pipeline and return both raw records
    ///
    /// Used directly by callers that want structured output instead of the
    /// rendered report.
    pub async fn run_pipeline(
        &mut self,
        query: &str,
        image: &str,
    ) -> Result<(DiagnosticRecord, ValidationRecord)> {
        let request_id = uuid::Uuid::new_v4();
        tracing::info!(%request_id, query, "intent detected: medical image analysis");

        tracing::info!(%request_id, agent = self.vision.name(), "routing to vision agent");
        let diagnostic = self.vision.analyze(image).await?;

        tracing::info!(%request_id, agent = self.knowledge.name(), "routing to validation agent");
        let validation = self.knowledge.lookup(&diagnostic.diagnosis).await?;

        self.history.push(Exchange {
            query: query.to_string(),
            diagnosis: diagnostic.diagnosis.clone(),
            completed_at: Utc::now(),
        });

        Ok((diagnostic, validation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{SimVisionAgent, StaticKnowledgeBase};

    fn instant_orchestrator() -> (Orchestrator, Arc<SimVisionAgent>) {
        let vision = Arc::new(SimVisionAgent::new(Duration::ZERO));
        let knowledge = Arc::new(StaticKnowledgeBase::new(Duration::ZERO));
        let orchestrator = Orchestrator::new(vision.clone(), knowledge, Duration::ZERO);
        (orchestrator, vision)
    }

    #[tokio::test]
    async fn test_request_with_image_produces_report() {
        let (mut orchestrator, _) = instant_orchestrator();
        let report = orchestrator
            .process_request("Check this scan", Some("./scans/demo.jpg"))
            .await
            .unwrap();

        assert!(!report.is_empty());
        assert!(report.contains("GLIOMA"));
        assert!(report.contains("94.0%"));
    }

    #[tokio::test]
    async fn test_request_without_image_skips_agents() {
        let (mut orchestrator, vision) = instant_orchestrator();
        let response = orchestrator
            .process_request("Check this scan", None)
            .await
            .unwrap();

        assert_eq!(response, MISSING_IMAGE_WARNING);
        assert_eq!(vision.call_count(), 0);
        assert!(orchestrator.history().is_empty());
    }

    #[tokio::test]
    async fn test_completed_analyses_land_in_history() {
        let (mut orchestrator, _) = instant_orchestrator();
        orchestrator
            .process_request("first", Some("a.jpg"))
            .await
            .unwrap();
        orchestrator
            .process_request("second", Some("b.jpg"))
            .await
            .unwrap();

        let history = orchestrator.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].query, "first");
        assert_eq!(history[1].diagnosis, "Glioma");
    }

    #[tokio::test]
    async fn test_pipeline_validates_the_vision_diagnosis() {
        let (mut orchestrator, _) = instant_orchestrator();
        let (diagnostic, validation) = orchestrator
            .run_pipeline("query", "scan.jpg")
            .await
            .unwrap();

        assert_eq!(diagnostic.diagnosis, "Glioma");
        assert_eq!(validation.severity, "High");
        assert_eq!(validation.icd_code.as_deref(), Some("C71.9"));
    }
}
