use crate::core::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_page_size, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SESSION_HEADER: &str = "Bridge-Session";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: i64 = 50;

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    format!("researcher-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_session_header() -> String {
    DEFAULT_SESSION_HEADER.to_string()
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub session_token: String,
    #[serde(default = "default_session_header")]
    pub session_header: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TomlConfig {
    /// 以預設值建立配置
    pub fn new(endpoint: String, session_token: String) -> Self {
        Self {
            server: ServerConfig {
                endpoint,
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
                user_agent: default_user_agent(),
            },
            auth: AuthConfig {
                session_token,
                session_header: default_session_header(),
            },
            paging: PagingConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESEARCHER_SESSION_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server.endpoint", &self.server.endpoint)?;
        validate_range("server.timeout_seconds", self.server.timeout_seconds, 1, 300)?;
        validate_non_empty_string("server.user_agent", &self.server.user_agent)?;

        validate_non_empty_string("auth.session_header", &self.auth.session_header)?;
        validate_non_empty_string("auth.session_token", &self.auth.session_token)?;
        // 未替換的 ${VAR} 代表環境變數不存在
        if self.auth.session_token.starts_with("${") {
            return Err(ClientError::InvalidConfigValueError {
                field: "auth.session_token".to_string(),
                value: self.auth.session_token.clone(),
                reason: "Environment variable is not set".to_string(),
            });
        }

        validate_page_size(self.paging.default_page_size).map_err(|e| {
            ClientError::InvalidConfigValueError {
                field: "paging.default_page_size".to_string(),
                value: self.paging.default_page_size.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.server.endpoint
    }

    fn session_token(&self) -> &str {
        &self.auth.session_token
    }

    fn session_header(&self) -> &str {
        &self.auth.session_header
    }

    fn timeout_seconds(&self) -> u64 {
        self.server.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.server.user_agent
    }

    fn default_page_size(&self) -> i64 {
        self.paging.default_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
endpoint = "https://research.example.org"

[auth]
session_token = "token-123"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.session_header(), DEFAULT_SESSION_HEADER);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.default_page_size(), DEFAULT_PAGE_SIZE);
        assert!(config.user_agent().starts_with("researcher-client/"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RESEARCHER_CLIENT_TEST_TOKEN", "from-env");
        let config = TomlConfig::from_toml_str(
            r#"
[server]
endpoint = "https://research.example.org"

[auth]
session_token = "${RESEARCHER_CLIENT_TEST_TOKEN}"
"#,
        )
        .unwrap();
        assert_eq!(config.session_token(), "from-env");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
endpoint = "https://research.example.org"

[auth]
session_token = "${RESEARCHER_CLIENT_DEFINITELY_UNSET}"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_page_size_and_scheme() {
        let mut config = TomlConfig::new("https://research.example.org".into(), "t".into());
        config.paging.default_page_size = 4;
        assert!(config.validate().is_err());

        let config = TomlConfig::new("ftp://research.example.org".into(), "t".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
endpoint = "http://localhost:9000"
timeout_seconds = 5

[auth]
session_token = "abc"
session_header = "X-Session"

[paging]
default_page_size = 25
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.session_header(), "X-Session");
        assert_eq!(config.default_page_size(), 25);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/researcher.toml").unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
