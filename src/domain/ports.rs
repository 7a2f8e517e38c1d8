use crate::domain::model::{AccountSummary, PageRequest, PagedResourceList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn session_token(&self) -> &str;
    fn session_header(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn default_page_size(&self) -> i64;
}

/// 後端帳號查詢服務
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn fetch_accounts(&self, request: &PageRequest)
        -> Result<PagedResourceList<AccountSummary>>;
}
