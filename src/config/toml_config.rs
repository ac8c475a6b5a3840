use crate::adapters::fun_translations::DEFAULT_TRANSLATION_URL;
use crate::adapters::poke_api::DEFAULT_POKEAPI_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::{validate_provider, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_pokeapi_url")]
    pub pokeapi_url: String,
    #[serde(default = "default_translation_url")]
    pub translation_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: default_pokeapi_url(),
            translation_url: default_translation_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub level: Option<String>,
}

fn default_pokeapi_url() -> String {
    DEFAULT_POKEAPI_URL.to_string()
}

fn default_translation_url() -> String {
    DEFAULT_TRANSLATION_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PokedexError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PokedexError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${POKEAPI_URL})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PokedexError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 是否使用 JSON 日誌
    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    /// 是否啟用 debug 等級日誌
    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .map(|level| level.eq_ignore_ascii_case("debug") || level.eq_ignore_ascii_case("trace"))
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind_address
    }

    fn pokeapi_url(&self) -> &str {
        &self.upstream.pokeapi_url
    }

    fn translation_url(&self) -> &str {
        &self.upstream.translation_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.upstream.request_timeout_secs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind_address = "0.0.0.0:8080"

[upstream]
pokeapi_url = "http://pokeapi.internal/api/v2"
translation_url = "http://translations.internal"
request_timeout_secs = 10

[logging]
json = true
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.pokeapi_url(), "http://pokeapi.internal/api/v2");
        assert_eq!(config.translation_url(), "http://translations.internal");
        assert_eq!(config.request_timeout_secs(), 10);
        assert!(config.json_logs());
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_upstream_defaults() {
        let toml_content = r#"
[server]
bind_address = "127.0.0.1:5000"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pokeapi_url(), DEFAULT_POKEAPI_URL);
        assert_eq!(config.translation_url(), DEFAULT_TRANSLATION_URL);
        assert_eq!(config.request_timeout_secs(), 30);
        assert!(!config.json_logs());
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("POKEDEX_TEST_POKEAPI_URL", "https://test.pokeapi.local");

        let toml_content = r#"
[server]
bind_address = "127.0.0.1:5000"

[upstream]
pokeapi_url = "${POKEDEX_TEST_POKEAPI_URL}"
translation_url = "${POKEDEX_TEST_UNDEFINED_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pokeapi_url(), "https://test.pokeapi.local");
        assert_eq!(config.translation_url(), "${POKEDEX_TEST_UNDEFINED_VAR}");
        // 未替換的變數無法通過驗證
        assert!(config.validate().is_err());

        std::env::remove_var("POKEDEX_TEST_POKEAPI_URL");
    }

    #[test]
    fn test_missing_server_section_is_error() {
        let err = TomlConfig::from_toml_str("[upstream]\nrequest_timeout_secs = 5\n").unwrap_err();
        assert!(matches!(err, PokedexError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
bind_address = "127.0.0.1:5000"

[upstream]
pokeapi_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
bind_address = "127.0.0.1:6000"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:6000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PokedexError::IoError(_)));
    }
}
