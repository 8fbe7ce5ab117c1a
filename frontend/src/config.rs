//! Runtime configuration for the incoming documents API.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_string() }
    }

    /// Reads `INCOMING_API_BASE_URL` at compile time; the wasm bundle has no process environment.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("INCOMING_API_BASE_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}
