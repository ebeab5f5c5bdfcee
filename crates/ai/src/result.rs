use thiserror::Error;

pub type AiResult<T> = Result<T, AiError>;

/// Failure talking to the assistant backend.
///
/// Never shown to the user: [`crate::ask_with_fallback`] replaces it with a
/// fixed reply.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("assistant backend unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("invalid assistant response: {0}")]
    InvalidResponse(String),

    #[error("assistant not configured: {0}")]
    Configuration(String),
}
