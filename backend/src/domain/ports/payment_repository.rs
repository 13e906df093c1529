//! Port for payment persistence.

use async_trait::async_trait;

use crate::domain::{Payment, Stored};

use super::RepositoryError;

/// Equality filter over payments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    pub user_email: Option<String>,
    pub month: Option<String>,
    pub status: Option<String>,
}

impl PaymentFilter {
    pub fn matches(&self, payment: &Payment) -> bool {
        self.user_email
            .as_deref()
            .is_none_or(|email| payment.user_email().as_str() == email)
            && self
                .month
                .as_deref()
                .is_none_or(|month| payment.month() == Some(month))
            && self
                .status
                .as_deref()
                .is_none_or(|status| payment.status().as_str() == status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Stored<Payment>, RepositoryError>;

    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Stored<Payment>>, RepositoryError>;
}
