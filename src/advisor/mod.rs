//! AI health advisor
//!
//! Wraps the generative-language call behind [`HealthAdvisor`] and flattens
//! every outcome into the single string shown in the conversation log.

pub mod gemini;
pub mod pipeline;

pub use gemini::GeminiClient;
pub use pipeline::{AdvisorCommand, AdvisorEvent, AdvisorPipeline};

use crate::Result;
use async_trait::async_trait;
use tracing::warn;

/// Reply used when the service answers with no text
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that.";

/// A service that answers a free-text health query
#[async_trait]
pub trait HealthAdvisor: Send + Sync {
    fn name(&self) -> &str;

    /// Send `prompt` and return the raw text output, which may be empty
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Ask `advisor` and normalize the outcome into display text.
///
/// Never fails: errors come back as `"Error: {e}"`.
pub async fn query(advisor: &dyn HealthAdvisor, text: &str) -> String {
    match advisor.generate(text).await {
        Ok(reply) if reply.is_empty() => FALLBACK_REPLY.to_string(),
        Ok(reply) => reply,
        Err(e) => {
            warn!(advisor = advisor.name(), error = %e, "Advisor query failed");
            format!("Error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HealthDeskError;

    struct Canned(std::result::Result<String, HealthDeskError>);

    #[async_trait]
    impl HealthAdvisor for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_query_passes_text_through() {
        let advisor = Canned(Ok("Flu is a viral infection.".to_string()));
        assert_eq!(query(&advisor, "What is flu?").await, "Flu is a viral infection.");
    }

    #[tokio::test]
    async fn test_query_empty_reply_uses_fallback() {
        let advisor = Canned(Ok(String::new()));
        assert_eq!(query(&advisor, "hi").await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_query_whitespace_reply_is_kept() {
        let advisor = Canned(Ok("  \n".to_string()));
        assert_eq!(query(&advisor, "hi").await, "  \n");
    }

    #[tokio::test]
    async fn test_query_response_error_is_prefixed() {
        let advisor = Canned(Err(HealthDeskError::ResponseError(
            "candidate has no text (finish reason: SAFETY)".to_string(),
        )));
        assert_eq!(
            query(&advisor, "hi").await,
            "Error: Malformed response: candidate has no text (finish reason: SAFETY)"
        );
    }

    #[tokio::test]
    async fn test_query_error_is_prefixed() {
        let advisor = Canned(Err(HealthDeskError::Transport("timeout".to_string())));
        assert_eq!(query(&advisor, "hi").await, "Error: timeout");

        let advisor = Canned(Err(HealthDeskError::AuthError("bad key".to_string())));
        assert_eq!(
            query(&advisor, "hi").await,
            "Error: Authentication failed: bad key"
        );
    }
}
