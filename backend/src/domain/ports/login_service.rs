//! Driving port for the login upsert.
//!
//! Inbound adapters call this to sign a resident in without knowing how
//! residents are stored, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error};

/// Validated login input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: EmailAddress,
    pub name: Option<String>,
    pub apartment: Option<String>,
}

/// Result of a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub email: EmailAddress,
    /// `true` when this call registered the resident.
    pub created: bool,
}

/// Sign in by email, registering unknown residents on first use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, Error>;
}
