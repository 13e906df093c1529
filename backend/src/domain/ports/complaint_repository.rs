//! Port for complaint persistence.

use async_trait::async_trait;

use crate::domain::{Complaint, Stored};

use super::RepositoryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<String>,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| complaint.status().as_str() == status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, complaint: &Complaint) -> Result<Stored<Complaint>, RepositoryError>;

    async fn list(
        &self,
        filter: &ComplaintFilter,
    ) -> Result<Vec<Stored<Complaint>>, RepositoryError>;
}
