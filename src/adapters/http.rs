use crate::core::{AccountService, AccountSummary, ConfigProvider, PageRequest, PagedResourceList};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const ACCOUNTS_PATH: &str = "v3/participants";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// 伺服器回傳的分頁格式
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedResponse {
    items: Vec<AccountSummary>,
    offset_by: Option<u64>,
    total: u64,
}

/// 透過 HTTP 查詢帳號的後端實作
#[derive(Clone)]
pub struct HttpAccountService {
    client: Client,
    accounts_url: String,
    session_header: String,
    session_token: String,
}

impl HttpAccountService {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            accounts_url: format!(
                "{}/{}",
                config.endpoint().trim_end_matches('/'),
                ACCOUNTS_PATH
            ),
            session_header: config.session_header().to_string(),
            session_token: config.session_token().to_string(),
        })
    }

    pub fn accounts_url(&self) -> &str {
        &self.accounts_url
    }
}

#[async_trait]
impl AccountService for HttpAccountService {
    async fn fetch_accounts(
        &self,
        request: &PageRequest,
    ) -> Result<PagedResourceList<AccountSummary>> {
        let mut http_request = self
            .client
            .get(&self.accounts_url)
            .header(self.session_header.as_str(), self.session_token.as_str())
            .query(&[
                ("offsetBy", request.offset_by().to_string()),
                ("pageSize", request.page_size().to_string()),
            ]);

        if let Some(filter) = request.email_filter() {
            http_request = http_request.query(&[("emailFilter", filter)]);
        }

        tracing::debug!("📡 GET {}", self.accounts_url);
        let response = http_request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let payload: PagedResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
                message: format!("could not decode account page: {}", e),
            })?;

        // 未回傳 offsetBy 時沿用請求值
        let offset_by = payload.offset_by.unwrap_or_else(|| request.offset_by());
        PagedResourceList::new(payload.items, offset_by, request.page_size(), payload.total)
    }
}
