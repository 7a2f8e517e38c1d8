use crate::core::{AccountService, AccountSummary, PageRequest, PagedResourceList};
use crate::utils::error::{ClientError, Result};

/// 研究人員端的帳號查詢客戶端
pub struct ResearcherClient<S: AccountService> {
    service: S,
}

impl<S: AccountService> ResearcherClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    /// 從 `offset` 起取得一頁帳號摘要
    ///
    /// `offset` 為負數或 `page_size` 不在 5..=250 時，
    /// 在連線後端之前即回傳 [`ClientError::InvalidArgument`]
    pub async fn list_accounts(
        &self,
        offset: i64,
        page_size: i64,
    ) -> Result<PagedResourceList<AccountSummary>> {
        let request = PageRequest::new(offset, page_size)?;
        self.fetch_page(&request).await
    }

    /// 同 [`list_accounts`](Self::list_accounts)，僅保留 email 含 `email_filter` 的帳號
    pub async fn list_accounts_filtered(
        &self,
        offset: i64,
        page_size: i64,
        email_filter: Option<&str>,
    ) -> Result<PagedResourceList<AccountSummary>> {
        let request = PageRequest::new(offset, page_size)?.with_email_filter(email_filter);
        self.fetch_page(&request).await
    }

    pub(crate) async fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<PagedResourceList<AccountSummary>> {
        tracing::debug!(
            "Requesting accounts offsetBy={} pageSize={} emailFilter={:?}",
            request.offset_by(),
            request.page_size(),
            request.email_filter()
        );

        let page = self.service.fetch_accounts(request).await?;

        // 伺服器必須回傳所要求的起點
        if page.offset_by() != request.offset_by() {
            tracing::warn!(
                "⚠️ Server returned offsetBy={} for requested offsetBy={}",
                page.offset_by(),
                request.offset_by()
            );
            return Err(ClientError::InvalidResponse {
                message: format!(
                    "expected offsetBy {} but server returned {}",
                    request.offset_by(),
                    page.offset_by()
                ),
            });
        }
        if page.len() > request.page_size() as usize {
            return Err(ClientError::InvalidResponse {
                message: format!(
                    "server returned {} items for page size {}",
                    page.len(),
                    request.page_size()
                ),
            });
        }

        tracing::info!(
            "📄 Received {} of {} accounts at offset {}",
            page.len(),
            page.total(),
            page.offset_by()
        );
        Ok(page)
    }
}
