use crate::adapters::http::HttpAccountService;
use crate::core::client::ResearcherClient;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};

/// 已登入的工作階段；登入流程由外部完成，這裡只持有 token
pub struct Session {
    service: HttpAccountService,
}

impl Session {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("server.endpoint", config.endpoint())?;
        validate_non_empty_string("auth.session_token", config.session_token())?;
        validate_non_empty_string("auth.session_header", config.session_header())?;
        validate_range("server.timeout_seconds", config.timeout_seconds(), 1, 300)?;

        let service = HttpAccountService::new(config)?;
        tracing::debug!("Session bound to {}", service.accounts_url());
        Ok(Self { service })
    }

    pub fn researcher_client(&self) -> ResearcherClient<HttpAccountService> {
        ResearcherClient::new(self.service.clone())
    }
}
