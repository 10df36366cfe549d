//! Agent capability seams and their simulated implementations
//!
//! Each pipeline capability is a trait with exactly one simulated
//! implementation. A real backend plugs in by adding an arm to the matching
//! factory; callers only ever see the trait objects.

mod error;
mod knowledge;
mod sim;
mod types;

pub use error::AgentError;
pub use knowledge::StaticKnowledgeBase;
pub use sim::SimVisionAgent;
pub use types::{DiagnosticRecord, ValidationRecord};

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for vision agents that produce a structured finding from an image
#[async_trait]
pub trait VisionAgent: Send + Sync {
    /// Get the agent name
    fn name(&self) -> &str;

    /// Run inference over one image reference
    ///
    /// The image reference is opaque to the pipeline; a real backend would
    /// load and preprocess it, the simulation only echoes it into the log.
    async fn analyze(&self, image: &str) -> Result<DiagnosticRecord>;
}

/// Trait for knowledge bases that cross-reference a diagnosis label
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Get the knowledge-base name
    fn name(&self) -> &str;

    /// Look up reference data for a diagnosis label
    ///
    /// Labels outside the known set resolve to a minimal fallback record
    /// rather than an error.
    async fn lookup(&self, diagnosis: &str) -> Result<ValidationRecord>;
}

/// Create a vision agent based on name
pub fn create_vision_agent(name: &str, config: &Config) -> Result<Arc<dyn VisionAgent>> {
    match name.to_lowercase().as_str() {
        "sim" | "mock" => Ok(Arc::new(SimVisionAgent::new(config.vision.latency()))),
        other => Err(AgentError::UnknownAgent(other.to_string()).into()),
    }
}

/// Create a knowledge base based on name
pub fn create_knowledge_base(name: &str, config: &Config) -> Result<Arc<dyn KnowledgeBase>> {
    match name.to_lowercase().as_str() {
        "static" | "sim" => Ok(Arc::new(StaticKnowledgeBase::new(config.knowledge.latency()))),
        other => Err(AgentError::UnknownAgent(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_rejects_unknown_names() {
        let config = Config::default();
        assert!(create_vision_agent("sim", &config).is_ok());
        assert!(create_vision_agent("gpu-cluster", &config).is_err());
        assert!(create_knowledge_base("static", &config).is_ok());
        assert!(create_knowledge_base("neo4j", &config).is_err());
    }
}
