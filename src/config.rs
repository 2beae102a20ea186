use crate::tts::elevenlabs::DEFAULT_API_URL;

/// Process configuration, read from the environment once at startup and
/// injected into the components that need it.
///
/// A missing provider key is reported per request, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub api_key: Option<String>,
    pub api_url: String,
    pub store_url: Option<String>,
    pub store_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            api_key: std::env::var("ELEVENLABS_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            api_url: std::env::var("ELEVENLABS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            store_url: std::env::var("METRICS_STORE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            store_api_key: std::env::var("METRICS_STORE_API_KEY").ok(),
        }
    }
}
