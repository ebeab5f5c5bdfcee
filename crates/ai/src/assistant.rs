use async_trait::async_trait;

use crate::digest::ContextDigest;
use crate::result::{AiError, AiResult};

/// Shown when the backend cannot be reached or is misconfigured.
pub const OFFLINE_FALLBACK_REPLY: &str =
    "I'm currently offline. Please check your API configuration.";

/// Shown when the backend answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't process that request at the moment.";

/// A conversational backend answering free-text questions about the data.
///
/// Implementations receive the question and the current digest and return
/// the reply verbatim. They must not retry; callers go through
/// [`ask_with_fallback`].
#[async_trait]
pub trait DecisionSupport: Send + Sync {
    async fn summarize(&self, query: &str, digest: &ContextDigest) -> AiResult<String>;
}

/// Ask `assistant`, substituting the fixed fallback replies instead of
/// surfacing an error.
pub async fn ask_with_fallback<A>(assistant: &A, query: &str, digest: &ContextDigest) -> String
where
    A: DecisionSupport + ?Sized,
{
    match assistant.summarize(query, digest).await {
        Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "assistant request failed; using offline reply");
            OFFLINE_FALLBACK_REPLY.to_string()
        }
    }
}

/// Backend used when no API key is configured. Always reports itself unconfigured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAssistant;

#[async_trait]
impl DecisionSupport for OfflineAssistant {
    async fn summarize(&self, _query: &str, _digest: &ContextDigest) -> AiResult<String> {
        Err(AiError::Configuration("no assistant backend configured".to_string()))
    }
}
