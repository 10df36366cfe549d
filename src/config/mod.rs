//! Configuration management for triage

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub orchestrator: OrchestratorConfig,
    pub vision: VisionConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Vision agent implementation to route image analysis to
    pub vision_agent: String,
    /// Knowledge base implementation for diagnosis validation
    pub knowledge_base: String,
    /// Simulated report-synthesis delay in milliseconds
    pub synthesis_latency_ms: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            vision_agent: "sim".to_string(),
            knowledge_base: "static".to_string(),
            synthesis_latency_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Simulated inference time in milliseconds
    pub latency_ms: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self { latency_ms: 2000 }
    }
}

impl VisionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Simulated graph-query time in milliseconds
    pub latency_ms: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self { latency_ms: 1000 }
    }
}

impl KnowledgeConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl OrchestratorConfig {
    pub fn synthesis_latency(&self) -> Duration {
        Duration::from_millis(self.synthesis_latency_ms)
    }
}

impl Config {
    /// Load configuration from default location or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "triage") {
            let config_dir = proj_dirs.config_dir();
            std::fs::create_dir_all(config_dir)?;
            Ok(config_dir.join("config.toml"))
        } else {
            Ok(PathBuf::from("config.toml"))
        }
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Zero out all simulated latencies (the `--instant` flag)
    pub fn without_latency(mut self) -> Self {
        self.vision.latency_ms = 0;
        self.knowledge.latency_ms = 0;
        self.orchestrator.synthesis_latency_ms = 0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.orchestrator.vision_agent, "sim");
        assert_eq!(config.orchestrator.knowledge_base, "static");
        assert_eq!(config.vision.latency(), Duration::from_secs(2));
    }

    #[test]
    fn test_without_latency() {
        let config = Config::default().without_latency();
        assert_eq!(config.vision.latency(), Duration::ZERO);
        assert_eq!(config.knowledge.latency(), Duration::ZERO);
        assert_eq!(config.orchestrator.synthesis_latency(), Duration::ZERO);
    }

    #[test]
    fn test_partial_toml_round_trip() {
        let config: Config = toml::from_str("[vision]\nlatency_ms = 5\n").unwrap();
        assert_eq!(config.vision.latency_ms, 5);
        // Unspecified sections keep their defaults
        assert_eq!(config.knowledge.latency_ms, 1000);
    }
}
