use crate::core::client::ResearcherClient;
use crate::core::{AccountService, AccountSummary, PageRequest, PagedResourceList};
use crate::utils::error::Result;

/// 逐頁走訪帳號清單，直到 total 用盡
pub struct AccountPager<'a, S: AccountService> {
    client: &'a ResearcherClient<S>,
    request: PageRequest,
    finished: bool,
}

impl<'a, S: AccountService> AccountPager<'a, S> {
    pub fn new(client: &'a ResearcherClient<S>, start_offset: i64, page_size: i64) -> Result<Self> {
        Ok(Self {
            client,
            request: PageRequest::new(start_offset, page_size)?,
            finished: false,
        })
    }

    pub fn with_email_filter(mut self, filter: Option<&str>) -> Self {
        self.request = self.request.with_email_filter(filter);
        self
    }

    pub async fn next_page(&mut self) -> Result<Option<PagedResourceList<AccountSummary>>> {
        if self.finished {
            return Ok(None);
        }

        let page = self.client.fetch_page(&self.request).await?;
        // 空頁代表伺服器的 total 高估了實際資料
        if page.is_empty() {
            if page.offset_by() < page.total() {
                tracing::warn!(
                    "⚠️ Empty page at offset {} although total is {}",
                    page.offset_by(),
                    page.total()
                );
            }
            self.finished = true;
            return Ok(None);
        }

        if page.has_next() {
            self.request = self.request.at_offset(page.next_offset());
        } else {
            self.finished = true;
        }
        Ok(Some(page))
    }

    /// 取出剩餘所有頁面；達到 `max_items` 時提前停止
    pub async fn collect_all(mut self, max_items: Option<usize>) -> Result<Vec<AccountSummary>> {
        if max_items == Some(0) {
            return Ok(Vec::new());
        }

        let mut accounts = Vec::new();
        while let Some(page) = self.next_page().await? {
            accounts.extend(page.into_items());
            if let Some(limit) = max_items {
                if accounts.len() >= limit {
                    accounts.truncate(limit);
                    break;
                }
            }
        }
        tracing::debug!("Collected {} accounts", accounts.len());
        Ok(accounts)
    }
}
