use crate::utils::error::{ClientError, Result};
use url::Url;

/// 伺服器接受的最小分頁大小
pub const MIN_PAGE_SIZE: i64 = 5;
/// 伺服器接受的最大分頁大小
pub const MAX_PAGE_SIZE: i64 = 250;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ClientError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 檢查分頁起點；負數在送出請求前即被拒絕
pub fn validate_offset(offset: i64) -> Result<u64> {
    u64::try_from(offset)
        .map_err(|_| ClientError::invalid_argument("offsetBy", offset, "must not be negative"))
}

/// 檢查分頁大小是否落在 [MIN_PAGE_SIZE, MAX_PAGE_SIZE]
pub fn validate_page_size(page_size: i64) -> Result<u32> {
    if page_size < MIN_PAGE_SIZE {
        return Err(ClientError::invalid_argument(
            "pageSize",
            page_size,
            format!("must be at least {}", MIN_PAGE_SIZE),
        ));
    }
    if page_size > MAX_PAGE_SIZE {
        return Err(ClientError::invalid_argument(
            "pageSize",
            page_size,
            format!("must be at most {}", MAX_PAGE_SIZE),
        ));
    }
    u32::try_from(page_size)
        .map_err(|_| ClientError::invalid_argument("pageSize", page_size, "out of range"))
}
