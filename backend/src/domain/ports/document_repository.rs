//! Port for document persistence.

use async_trait::async_trait;

use crate::domain::{Document, Stored};

use super::RepositoryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub category: Option<String>,
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| document.category() == Some(category))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn create(&self, document: &Document) -> Result<Stored<Document>, RepositoryError>;

    async fn list(
        &self,
        filter: &DocumentFilter,
    ) -> Result<Vec<Stored<Document>>, RepositoryError>;
}
