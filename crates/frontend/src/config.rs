//! Application configuration, built once in `App` and provided through
//! context.

use leptos::prelude::*;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    pub app_title: &'static str,
}

impl AppConfig {
    /// `FAST2_API_URL` at compile time, otherwise the local backend.
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("FAST2_API_URL"))
    }

    fn with_api_url(url: Option<&str>) -> Self {
        let api_base = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base,
            app_title: "Fast2 Admin",
        }
    }
}

/// Config provided by `App`; falls back to the environment when a
/// component is rendered outside of it.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_falls_back_and_loses_trailing_slash() {
        assert_eq!(AppConfig::with_api_url(None).api_base, DEFAULT_API_URL);
        assert_eq!(AppConfig::with_api_url(Some("  ")).api_base, DEFAULT_API_URL);
        assert_eq!(
            AppConfig::with_api_url(Some("https://api.fast2.in/")).api_base,
            "https://api.fast2.in"
        );
    }
}
