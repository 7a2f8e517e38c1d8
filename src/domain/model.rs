use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_offset, validate_page_size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Enabled,
    Disabled,
    Unverified,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Unverified => "unverified",
        };
        f.write_str(label)
    }
}

/// 帳號摘要：伺服器回傳的唯讀快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
}

impl AccountSummary {
    /// 名、姓與 email 皆非空白
    pub fn is_complete(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// 已驗證的分頁請求；只能透過 [`PageRequest::new`] 建立
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    offset_by: u64,
    page_size: u32,
    email_filter: Option<String>,
}

impl PageRequest {
    pub fn new(offset: i64, page_size: i64) -> Result<Self> {
        Ok(Self {
            offset_by: validate_offset(offset)?,
            page_size: validate_page_size(page_size)?,
            email_filter: None,
        })
    }

    pub fn with_email_filter(mut self, filter: Option<&str>) -> Self {
        self.email_filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        self
    }

    pub fn offset_by(&self) -> u64 {
        self.offset_by
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn email_filter(&self) -> Option<&str> {
        self.email_filter.as_deref()
    }

    /// 相同大小與篩選條件，從新的起點開始
    pub(crate) fn at_offset(&self, offset_by: u64) -> Self {
        Self {
            offset_by,
            ..self.clone()
        }
    }
}

/// 一頁結果與分頁資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResourceList<T> {
    items: Vec<T>,
    offset_by: u64,
    page_size: u32,
    total: u64,
}

impl<T> PagedResourceList<T> {
    /// 建立一頁結果；筆數超過 `page_size` 或 `total` 時拒絕
    pub fn new(items: Vec<T>, offset_by: u64, page_size: u32, total: u64) -> Result<Self> {
        let len = items.len() as u64;
        if len > u64::from(page_size) {
            return Err(ClientError::InvalidResponse {
                message: format!("page holds {} items but page size is {}", len, page_size),
            });
        }
        if len > total {
            return Err(ClientError::InvalidResponse {
                message: format!("page holds {} items but total is {}", len, total),
            });
        }
        Ok(Self {
            items,
            offset_by,
            page_size,
            total,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn offset_by(&self) -> u64 {
        self.offset_by
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_offset(&self) -> u64 {
        self.offset_by + self.items.len() as u64
    }

    pub fn has_next(&self) -> bool {
        !self.items.is_empty() && self.next_offset() < self.total
    }
}
