//! Port for notice persistence.

use async_trait::async_trait;

use crate::domain::{Notice, Stored};

use super::RepositoryError;

/// Membership filter over notices: a notice matches when it carries `tag`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeFilter {
    pub tag: Option<String>,
}

impl NoticeFilter {
    pub fn matches(&self, notice: &Notice) -> bool {
        self.tag.as_deref().is_none_or(|tag| notice.has_tag(tag))
    }
}

/// Persistence for notices. Listing order is unspecified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create(&self, notice: &Notice) -> Result<Stored<Notice>, RepositoryError>;

    async fn list(&self, filter: &NoticeFilter) -> Result<Vec<Stored<Notice>>, RepositoryError>;
}
