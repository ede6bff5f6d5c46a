use growthyari_states::State;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
}

/// Environment variables read by [`BusinessConfig::from_env`].
#[derive(Deserialize, Debug, Default)]
struct RawConfig {
    growthyari_api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Backend origin without the `/api` suffix. Empty means same-origin.
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Build-default config with `GROWTHYARI_API_BASE_URL` applied on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let mut config = Self::default();
        if let Some(url) = raw
            .growthyari_api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
        {
            config.api_base_url = url;
        }
        Ok(config)
    }

    pub fn api_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api".to_string()
        } else {
            format!("{}/api", self.api_base_url)
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                "".to_string()
            } else if cfg!(feature = "env_test") {
                "https://test.growthyari.com".to_string()
            } else if cfg!(feature = "env_nightly") {
                "https://nightly.growthyari.com".to_string()
            } else {
                "https://growthyari.com".to_string()
            },
        }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_base_url, "");
            assert_eq!(config.api_url(), "/api");
        } else if cfg!(feature = "env_test") {
            assert_eq!(config.api_url(), "https://test.growthyari.com/api");
        } else if cfg!(feature = "env_nightly") {
            assert_eq!(config.api_url(), "https://nightly.growthyari.com/api");
        } else {
            assert_eq!(config.api_base_url, "https://growthyari.com");
            assert_eq!(config.api_url(), "https://growthyari.com/api");
        }
    }

    #[test]
    fn test_env_overrides_base_url() {
        let config = BusinessConfig::from_vars(vec![(
            "GROWTHYARI_API_BASE_URL",
            "http://localhost:5000/",
        )])
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.api_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_missing_or_blank_env_keeps_default() {
        let config = BusinessConfig::from_vars(vec![("PATH", "/usr/bin")]).unwrap();
        assert_eq!(config, BusinessConfig::default());

        let config = BusinessConfig::from_vars(vec![("GROWTHYARI_API_BASE_URL", "  ")]).unwrap();
        assert_eq!(config, BusinessConfig::default());
    }
}
