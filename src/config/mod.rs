#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use cli::OutputFormat;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "researcher-accounts")]
#[command(about = "List account summaries visible to a researcher session")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the research platform API")]
    pub endpoint: Option<String>,

    #[arg(long, env = "RESEARCHER_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    #[arg(long)]
    pub session_header: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub offset: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    #[arg(long, help = "Only accounts whose email contains this text")]
    pub email_filter: Option<String>,

    #[arg(long, help = "Walk every page from --offset to the end")]
    pub all: bool,

    #[arg(long, requires = "all", help = "Stop after this many accounts")]
    pub max_items: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數；命令列優先
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::new(
                validate_required_field("server.endpoint", &self.endpoint)?.clone(),
                validate_required_field("auth.session_token", &self.session_token)?.clone(),
            ),
        };

        if let Some(endpoint) = &self.endpoint {
            config.server.endpoint = endpoint.clone();
        }
        if let Some(token) = &self.session_token {
            config.auth.session_token = token.clone();
        }
        if let Some(header) = &self.session_header {
            config.auth.session_header = header.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.server.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
