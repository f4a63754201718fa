/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend address used when neither environment variable is set
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Path of the backend health endpoint, appended to the base URL
    pub const HEALTH_PATH: &'static str = "/api/v1/health";

    /// Environment variable checked first for the backend base URL
    pub const PRIMARY_KEY: &'static str = "API_URL";

    /// Fallback environment variable, kept for older deployments
    pub const SECONDARY_KEY: &'static str = "API_BASE_URL";
}

/// Snapshot of the backend location settings.
///
/// The WASM bundle has no process environment at run time, so the values are
/// captured when the crate is compiled and stay fixed for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    api_url: Option<&'static str>,
    api_base_url: Option<&'static str>,
}

impl AppConfig {
    /// Creates a snapshot from explicit values (primary, secondary).
    pub const fn new(api_url: Option<&'static str>, api_base_url: Option<&'static str>) -> Self {
        Self {
            api_url,
            api_base_url,
        }
    }

    /// Reads `API_URL` and `API_BASE_URL` from the build environment.
    // option_env! takes literals only; keep these in step with Config::PRIMARY_KEY/SECONDARY_KEY
    pub const fn from_build_env() -> Self {
        Self::new(option_env!("API_URL"), option_env!("API_BASE_URL"))
    }

    /// Resolves the backend base URL.
    ///
    /// The first non-empty value among `API_URL`, `API_BASE_URL` and
    /// [`Config::DEFAULT_BASE_URL`] wins.
    pub fn resolve_base_url(&self) -> &'static str {
        [self.api_url, self.api_base_url]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .unwrap_or(Config::DEFAULT_BASE_URL)
    }

    /// Full URL of the health endpoint. The base is used verbatim.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.resolve_base_url(), Config::HEALTH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::new(None, None);
        assert_eq!(config.resolve_base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_primary_wins() {
        let config = AppConfig::new(Some("https://api.example.com"), None);
        assert_eq!(config.resolve_base_url(), "https://api.example.com");

        let config = AppConfig::new(
            Some("https://api.example.com"),
            Some("https://fallback.example.com"),
        );
        assert_eq!(config.resolve_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_secondary_used_when_primary_unset() {
        let config = AppConfig::new(None, Some("https://fallback.example.com"));
        assert_eq!(config.resolve_base_url(), "https://fallback.example.com");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let config = AppConfig::new(Some(""), Some("https://fallback.example.com"));
        assert_eq!(config.resolve_base_url(), "https://fallback.example.com");

        let config = AppConfig::new(Some(""), Some(""));
        assert_eq!(config.resolve_base_url(), Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_key_names_match_build_env() {
        assert_eq!(Config::PRIMARY_KEY, "API_URL");
        assert_eq!(Config::SECONDARY_KEY, "API_BASE_URL");
        assert_eq!(
            AppConfig::from_build_env(),
            AppConfig::new(option_env!("API_URL"), option_env!("API_BASE_URL"))
        );
    }

    #[test]
    fn test_health_url() {
        let config = AppConfig::new(Some("https://api.example.com"), None);
        assert_eq!(config.health_url(), "https://api.example.com/api/v1/health");
    }
}
