//! Runtime configuration read from the environment.
use std::env;
use std::time::Duration;

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Endpoints, credentials and timeouts.
#[derive(Clone, Debug)]
pub struct DexConfig {
    pub pokeapi_base_url: String,
    pub ai: AiConfig,
    pub http_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
    /// `None` leaves the analyzer usable but every call fails with
    /// `AiError::MissingCredential`.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            ai: AiConfig::default(),
            http_timeout: Duration::from_secs(15),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl DexConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - data provider root (default: PokeAPI v2)
    /// - `GROQ_API_KEY` - text-generation credential (optional)
    /// - `GROQ_BASE_URL` - chat-completions root (default: Groq)
    /// - `GROQ_MODEL` - model identifier
    /// - `DEX_HTTP_TIMEOUT_SECS` - data provider timeout (default: 15)
    /// - `DEX_AI_TIMEOUT_SECS` - text-generation timeout (default: 60)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_non_empty("POKEAPI_BASE_URL") {
            config.pokeapi_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = read_non_empty("GROQ_BASE_URL") {
            config.ai.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = read_non_empty("GROQ_MODEL") {
            config.ai.model = model;
        }
        config.ai.api_key = read_non_empty("GROQ_API_KEY");

        if let Some(secs) = read_env::<u64>("DEX_HTTP_TIMEOUT_SECS") {
            config.http_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(secs) = read_env::<u64>("DEX_AI_TIMEOUT_SECS") {
            config.ai.timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}

fn read_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
