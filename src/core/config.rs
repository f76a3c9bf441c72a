use std::env;

/// Backend used when neither the CLI flag nor the env var is set (local dev server).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the research backend, without a trailing slash.
    pub backend_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyBackendUrl,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyBackendUrl => write!(f, "backend URL is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration. The CLI flag wins over `MODELPICK_BACKEND_URL`;
/// trailing slashes are trimmed so `{backend_url}/api/models` joins cleanly.
pub fn load(cli_backend_url: Option<&str>) -> Result<Config, ConfigError> {
    let raw = cli_backend_url
        .map(str::to_string)
        .or_else(|| env::var("MODELPICK_BACKEND_URL").ok())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    let backend_url = raw.trim().trim_end_matches('/').to_string();
    if backend_url.is_empty() {
        return Err(ConfigError::EmptyBackendUrl);
    }

    Ok(Config { backend_url })
}
