//! `tradeflow-ai`
//!
//! **Responsibility:** boundary to the conversational assistant.
//!
//! This crate does not depend on the ERP entity crates:
//! - Callers feed the digest through [`DigestBuilder`]; nothing here reads business collections.
//! - It never mutates business data.
//! - Replies are free text and are passed through unparsed.

pub mod assistant;
pub mod digest;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod prompt;
pub mod result;

pub use assistant::{
    DecisionSupport, EMPTY_REPLY_FALLBACK, OFFLINE_FALLBACK_REPLY, OfflineAssistant,
    ask_with_fallback,
};
pub use digest::{ContextDigest, DigestBuilder, MAX_DIGEST_ENTITIES};
#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiAssistant};
pub use prompt::build_prompt;
pub use result::{AiError, AiResult};
