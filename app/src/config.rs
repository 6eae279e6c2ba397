//! FILENAME: app/src/config.rs
// PURPOSE: Environment-backed configuration for the enrichment service.
// CONTEXT: Missing credentials disable the enrichment feature with an
//          explanatory message; they never take the filter features down.

use std::env;

use thiserror::Error;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the vector store id for tcode lookups.
pub const VECTOR_STORE_VAR: &str = "VECTOR_STORE_ID";
/// Optional override of the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
/// Optional override of the model name.
pub const MODEL_VAR: &str = "OPENAI_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("enrichment is disabled: set both {API_KEY_VAR} and {VECTOR_STORE_VAR}")]
    MissingCredentials,
}

/// Runtime configuration of the enrichment client.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub api_key: String,
    pub vector_store_id: String,
    pub base_url: String,
    pub model: String,
}

impl EnrichmentConfig {
    /// Reads the configuration from the process environment. Both the
    /// API key and the vector store id are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingCredentials)?;
        let vector_store_id = non_empty(VECTOR_STORE_VAR).ok_or(ConfigError::MissingCredentials)?;
        Ok(EnrichmentConfig {
            api_key,
            vector_store_id,
            base_url: non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}
