//! `tradeflow` binary support: configuration and assistant selection.

pub mod config;

pub use config::{AppConfig, ConfigError};

use tradeflow_ai::{DecisionSupport, OfflineAssistant};

/// The assistant backend the configuration asks for.
///
/// Falls back to [`OfflineAssistant`] when no API key is set, or when the
/// binary was built without the `gemini` feature.
pub fn assistant_for(config: &AppConfig) -> Box<dyn DecisionSupport> {
    #[cfg(feature = "gemini")]
    if let Some(key) = &config.api_key {
        match tradeflow_ai::GeminiAssistant::new(key.as_str(), config.model.as_str()) {
            Ok(assistant) => {
                tracing::info!(model = assistant.model(), "using gemini assistant backend");
                return Box::new(assistant);
            }
            Err(err) => {
                tracing::warn!(error = %err, "assistant backend unavailable; running offline")
            }
        }
    }

    #[cfg(not(feature = "gemini"))]
    if config.api_key.is_some() {
        tracing::warn!("API key set but built without the `gemini` feature; running offline");
    }

    Box::new(OfflineAssistant)
}
