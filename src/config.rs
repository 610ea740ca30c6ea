use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter credential. The assistant endpoint fails closed without it.
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_url: String,
    /// Sent upstream as `HTTP-Referer`
    pub openrouter_referer: String,
    /// Sent upstream as `X-Title`
    pub openrouter_title: String,
    pub assistant_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            openrouter_model: DEFAULT_MODEL.to_string(),
            openrouter_url: DEFAULT_OPENROUTER_URL.to_string(),
            openrouter_referer: "http://localhost:5000".to_string(),
            openrouter_title: "Study Planner AI".to_string(),
            assistant_timeout: Duration::from_secs(30),
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("SERVER_PORT must be a valid port number: {}", e))?,
            Err(_) => defaults.server_port,
        };

        let assistant_timeout = match env::var("ASSISTANT_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(secs.trim().parse().map_err(|e| {
                anyhow::anyhow!("ASSISTANT_TIMEOUT_SECS must be a whole number of seconds: {}", e)
            })?),
            Err(_) => defaults.assistant_timeout,
        };

        Ok(Config {
            openrouter_api_key: env::var("OPENROUTER_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            openrouter_model: env::var("OPENROUTER_MODEL").unwrap_or(defaults.openrouter_model),
            openrouter_url: env::var("OPENROUTER_URL").unwrap_or(defaults.openrouter_url),
            openrouter_referer: env::var("OPENROUTER_REFERER")
                .unwrap_or(defaults.openrouter_referer),
            openrouter_title: env::var("OPENROUTER_TITLE").unwrap_or(defaults.openrouter_title),
            assistant_timeout,
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or(defaults.cors_origins),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
