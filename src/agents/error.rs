//! Typed errors for agent operations
//!
//! The simulated agents never fail, but the seam keeps a typed error
//! contract so a real backend (model server, graph database) can be dropped
//! in without changing callers.

use thiserror::Error;

/// Agent operation errors with typed variants
#[derive(Debug, Error)]
pub enum AgentError {
    /// No agent is registered under the requested name
    #[error("Unknown agent: {0}. Supported: sim")]
    UnknownAgent(String),

    /// The backing service failed the request
    ///
    /// Transient backend issues. Can retry with backoff.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Connection/timeout failure reaching a remote agent
    ///
    /// Can retry with backoff.
    #[error("Network error: {0}")]
    Network(String),

    /// Other errors not fitting the above categories
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AgentError {
    /// Check if this error is retryable after a delay
    pub fn is_retryable(&self) -> bool {
        matches!(self, AgentError::Backend(_) | AgentError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_agent_is_not_retryable() {
        assert!(!AgentError::UnknownAgent("gpu".to_string()).is_retryable());
        assert!(AgentError::Network("connection refused".to_string()).is_retryable());
    }
}
