use crate::auth::jwt::JwtConfig;

/// Default video agent origin for local development.
const DEFAULT_VIDEO_AGENT_URL: &str = "http://localhost:8000";

/// Rendering happens inside the generate call, so the agent gets far longer
/// than an ordinary upstream request.
const DEFAULT_VIDEO_AGENT_TIMEOUT_SECS: u64 = 300;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Base URL of the video agent.
    pub video_agent_url: String,
    /// Timeout for calls to the video agent, in seconds.
    pub video_agent_timeout_secs: u64,
    /// Perplexity API key. The LLM helper endpoints answer 500 without it.
    pub perplexity_api_key: Option<String>,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                       |
    /// | `VIDEO_AGENT_API_URL`      | `http://localhost:8000`    |
    /// | `VIDEO_AGENT_TIMEOUT_SECS` | `300`                      |
    /// | `PERPLEXITY_API_KEY`       | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let video_agent_url = std::env::var("VIDEO_AGENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_VIDEO_AGENT_URL.into());

        let video_agent_timeout_secs: u64 = std::env::var("VIDEO_AGENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_VIDEO_AGENT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("VIDEO_AGENT_TIMEOUT_SECS must be a valid u64");

        let perplexity_api_key = std::env::var("PERPLEXITY_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            video_agent_url,
            video_agent_timeout_secs,
            perplexity_api_key,
            jwt,
        }
    }
}
