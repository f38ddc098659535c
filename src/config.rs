use rocket::figment::providers::Env;
use rocket::figment::Figment;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Application settings, read once at startup from Rocket's figment
/// (`Rocket.toml`, `ROCKET_*` env) plus a bare `ANTHROPIC_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub anthropic_base_url: String,
    #[serde(default = "default_model")]
    pub anthropic_model: String,
    #[serde(default = "default_max_tokens")]
    pub anthropic_max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub anthropic_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            anthropic_api_key: None,
            anthropic_base_url: default_base_url(),
            anthropic_model: default_model(),
            anthropic_max_tokens: default_max_tokens(),
            anthropic_timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Extract and validate the app section of a Rocket figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, String> {
        let merged = figment
            .clone()
            .merge(Env::raw().only(&["anthropic_api_key"]));
        let config: AppConfig = merged.extract().map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// The credential, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.anthropic_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.anthropic_base_url)
            .map_err(|e| format!("anthropic_base_url '{}': {}", self.anthropic_base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "anthropic_base_url must be http(s), got '{}'",
                url.scheme()
            ));
        }
        if self.anthropic_model.trim().is_empty() {
            return Err("anthropic_model must not be empty".into());
        }
        if self.anthropic_max_tokens == 0 {
            return Err("anthropic_max_tokens must be greater than 0".into());
        }
        if self.anthropic_timeout_secs == 0 {
            return Err("anthropic_timeout_secs must be greater than 0".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::figment::providers::Serialized;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.anthropic_max_tokens, 2000);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = AppConfig {
            anthropic_api_key: Some("   ".into()),
            ..AppConfig::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn key_is_trimmed() {
        let config = AppConfig {
            anthropic_api_key: Some(" sk-test \n".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.api_key(), Some("sk-test"));
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = AppConfig {
            anthropic_base_url: "not a url".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            anthropic_base_url: "ftp://example.com".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_token_budget() {
        let config = AppConfig {
            anthropic_max_tokens: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reads_values_from_figment() {
        let figment = Figment::from(Serialized::defaults(serde_json::json!({
            "anthropic_model": "claude-test",
            "anthropic_max_tokens": 512,
        })));
        let config = AppConfig::from_figment(&figment).unwrap();
        assert_eq!(config.anthropic_model, "claude-test");
        assert_eq!(config.anthropic_max_tokens, 512);
        assert_eq!(config.anthropic_base_url, DEFAULT_BASE_URL);
    }
}
