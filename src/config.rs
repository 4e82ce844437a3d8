use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ENDPOINT: &str = "/user/me";

pub const API_URL_VAR: &str = "API_URL";
pub const ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Where the registration request goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to the defaults for
    /// missing or blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            base_url: read(API_URL_VAR, DEFAULT_API_URL),
            endpoint: read(ENDPOINT_VAR, DEFAULT_ENDPOINT),
        }
    }

    pub fn with_overrides(mut self, base_url: Option<String>, endpoint: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_api() {
        let config = ApiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8000/user/me");
    }

    #[test]
    fn env_overrides_defaults_and_blank_is_ignored() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://api.example.com"),
            ("API_ENDPOINT", "   "),
        ]));
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn cli_overrides_env() {
        let config = ApiConfig::from_lookup(lookup_from(&[("API_URL", "http://from-env:1")]))
            .with_overrides(Some("http://from-cli:2".into()), None);
        assert_eq!(config.url(), "http://from-cli:2/user/me");
    }

    #[test]
    fn url_joins_slashes() {
        let cases = [
            ("http://h:1", "/user/me"),
            ("http://h:1/", "/user/me"),
            ("http://h:1/", "user/me"),
            ("http://h:1", "user/me"),
        ];
        for (base_url, endpoint) in cases {
            let config = ApiConfig {
                base_url: base_url.into(),
                endpoint: endpoint.into(),
            };
            assert_eq!(config.url(), "http://h:1/user/me");
        }
    }
}
