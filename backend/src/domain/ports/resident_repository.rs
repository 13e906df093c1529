//! Port for resident persistence.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Resident, Stored};

use super::RepositoryError;

/// Persistence for residents, keyed for lookup by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResidentRepository: Send + Sync {
    /// Store `resident` unless one with the same email exists.
    ///
    /// Returns `true` when a record was inserted. Adapters must make the
    /// check and the insert a single atomic step.
    async fn insert_if_absent(&self, resident: &Resident) -> Result<bool, RepositoryError>;

    /// Look up a resident by exact email match.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Stored<Resident>>, RepositoryError>;
}
