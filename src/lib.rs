pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpAccountService;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    client::ResearcherClient, pager::AccountPager, session::Session, AccountStatus,
    AccountSummary, PagedResourceList,
};
pub use crate::utils::error::{ClientError, Result};
