pub mod client;
pub mod pager;
pub mod session;

pub use crate::domain::model::{AccountStatus, AccountSummary, PageRequest, PagedResourceList};
pub use crate::domain::ports::{AccountService, ConfigProvider};
pub use crate::utils::error::Result;
