use std::path::PathBuf;
use std::time::Duration;

/// Upstream chat-completions endpoint used for page generation
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Full URL of the OpenAI-compatible `chat/completions` endpoint
    pub upstream_url: String,
    /// Bearer token for the upstream; generation is refused when absent
    pub api_key: Option<String>,
    /// Model identifier forwarded in every request
    pub model: String,
    /// Value of the `HTTP-Referer` attribution header
    pub referer: String,
    /// Value of the `X-Title` attribution header
    pub title: String,
    /// Total time allowed for one streamed generation
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            upstream_url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key: None,
            model: "xiaomi/mimo-v2-flash:free".to_string(),
            referer: "http://localhost:8080".to_string(),
            title: "Pagesmith".to_string(),
            timeout: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server listens on
    pub port: u16,
    /// Path to the SQLite database
    pub database_url: String,
    pub generation: GenerationConfig,
    /// Directory holding the built Dioxus frontend
    pub frontend_dist: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = GenerationConfig::default();
        let generation = GenerationConfig {
            upstream_url: env_str("GENERATION_UPSTREAM_URL", &defaults.upstream_url),
            api_key: std::env::var("OPENROUTER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env_str("GENERATION_MODEL", &defaults.model),
            referer: env_str("GENERATION_REFERER", &defaults.referer),
            title: env_str("GENERATION_TITLE", &defaults.title),
            timeout: Duration::from_secs(env_parse("GENERATION_TIMEOUT_SECS", 300)?),
        };

        Ok(Self {
            port: env_parse("PAGESMITH_PORT", 8080)?,
            database_url: env_str("PAGESMITH_DATABASE_URL", "sqlite:./data/pagesmith.db"),
            generation,
            frontend_dist: frontend_dist_from_env(),
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, val: &str) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    val.parse::<T>()
        .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}"))
}

/// Resolve the Dioxus frontend dist directory.
///
/// If `FRONTEND_DIST` is set, that value is used as-is.
/// Otherwise resolve from the workspace root so this works whether the
/// server is launched from repository root or from `pagesmith-server/`.
pub fn frontend_dist_from_env() -> String {
    if let Ok(path) = std::env::var("FRONTEND_DIST") {
        return path;
    }

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    workspace_root
        .join("target/dx/pagesmith-ui/debug/web/public")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_reports_key_and_value() {
        let err = parse_value::<u16>("PAGESMITH_PORT", "not-a-port").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PAGESMITH_PORT"));
        assert!(msg.contains("not-a-port"));
    }

    #[test]
    fn parse_value_accepts_numbers() {
        assert_eq!(parse_value::<u64>("GENERATION_TIMEOUT_SECS", "42").unwrap(), 42);
    }

    #[test]
    fn generation_defaults_point_at_openrouter() {
        let defaults = GenerationConfig::default();
        assert!(defaults.upstream_url.ends_with("/chat/completions"));
        assert!(defaults.api_key.is_none());
    }
}
