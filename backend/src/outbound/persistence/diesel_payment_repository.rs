//! PostgreSQL-backed [`PaymentRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PaymentFilter, PaymentRepository, RepositoryError};
use crate::domain::{Payment, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPaymentRow, PaymentRow};
use super::pool::DbPool;
use super::schema::payment;

#[derive(Debug, Clone)]
pub struct DieselPaymentRepository {
    pool: DbPool,
}

impl DieselPaymentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for DieselPaymentRepository {
    async fn create(&self, value: &Payment) -> Result<Stored<Payment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPaymentRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(payment::table)
            .values(&row)
            .returning(PaymentRow::as_returning())
            .get_result::<PaymentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Stored<Payment>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = payment::table.into_boxed();
        if let Some(email) = filter.user_email.as_deref() {
            query = query.filter(payment::user_email.eq(email));
        }
        if let Some(month) = filter.month.as_deref() {
            query = query.filter(payment::month.eq(month));
        }
        if let Some(status) = filter.status.as_deref() {
            query = query.filter(payment::status.eq(status));
        }

        let rows: Vec<PaymentRow> = query
            .order((payment::created_at.asc(), payment::id.asc()))
            .select(PaymentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(PaymentRow::into_stored).collect()
    }
}
