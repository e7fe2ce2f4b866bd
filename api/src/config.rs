//! Client configuration

/// Configuration for [`TicketClient`](crate::client::TicketClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the ticket backend, without a trailing slash
    pub api_base_url: String,
}

impl ApiConfig {
    /// Default backend address for local development
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    /// Create a configuration with an explicit base URL
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }

    /// Read the base URL from `CHURNBOARD_API_URL`, falling back to the
    /// local development default
    #[must_use]
    pub fn from_env() -> Self {
        let url = std::env::var("CHURNBOARD_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self::new(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().api_base_url, "http://localhost:5000");
    }
}
