//! Login upsert service.
//!
//! Signing in with an unknown email registers a resident with default role
//! and contact settings; signing in again changes nothing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{LoginOutcome, LoginRequest, LoginService, ResidentRepository};
use crate::domain::{Error, Resident};

/// [`LoginService`] backed by a [`ResidentRepository`].
#[derive(Clone)]
pub struct ResidentLoginService<R> {
    residents: Arc<R>,
}

impl<R> ResidentLoginService<R> {
    pub fn new(residents: Arc<R>) -> Self {
        Self { residents }
    }
}

#[async_trait]
impl<R> LoginService for ResidentLoginService<R>
where
    R: ResidentRepository,
{
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, Error> {
        let LoginRequest {
            email,
            name,
            apartment,
        } = request;
        let resident = Resident::from_login(email.clone(), name, apartment);
        let created = self.residents.insert_if_absent(&resident).await?;
        if created {
            info!(email = %email, "registered resident on first login");
        } else {
            debug!(email = %email, "resident already registered");
        }
        Ok(LoginOutcome { email, created })
    }
}
