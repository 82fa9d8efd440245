//! Runtime configuration from environment variables.

const DEFAULT_EXTERNAL_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external user/post API.
    pub external_base_url: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let external_base_url = std::env::var("EXTERNAL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EXTERNAL_BASE_URL.to_string());
        Self { external_base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            external_base_url: DEFAULT_EXTERNAL_BASE_URL.to_string(),
        }
    }
}
