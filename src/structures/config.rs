use std::fs;

use serde::Deserialize;

use crate::{error::DirectionsError, structures::WalkingOptions};

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub default_walking: WalkingOptions,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self, DirectionsError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, DirectionsError> {
        Ok(serde_yml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_yaml("api:\n  access_token: pk.test\n").unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.access_token, "pk.test");
        assert_eq!(config.default_walking, WalkingOptions::default());
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn full_config() {
        let yaml = r#"
api:
  base_url: http://localhost:8080
  access_token: pk.test
default_walking:
  alley_bias: -0.5
  walkway_bias: 0.75
  walking_speed: 1.1
server:
  bind: 0.0.0.0:4000
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.default_walking.alley_bias(), -0.5);
        assert_eq!(config.default_walking.walkway_bias(), 0.75);
        assert_eq!(config.default_walking.walking_speed(), 1.1);
        assert_eq!(config.server.bind, "0.0.0.0:4000");
    }

    #[test]
    fn rejects_non_finite_defaults() {
        let yaml = "api:\n  access_token: pk.test\ndefault_walking:\n  walking_speed: .inf\n";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(DirectionsError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load("does/not/exist.yml"),
            Err(DirectionsError::ConfigRead(_))
        ));
    }
}
