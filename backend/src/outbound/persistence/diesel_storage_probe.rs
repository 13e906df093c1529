//! PostgreSQL-backed [`StorageProbe`].
//!
//! Reports the current database name and which collection tables exist in
//! the active schema. Diesel's bookkeeping table is left out.

use async_trait::async_trait;
use diesel::QueryableByName;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::domain::Collection;
use crate::domain::ports::{RepositoryError, StorageProbe, StorageStatus};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

#[derive(Debug, QueryableByName)]
struct DatabaseNameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(Debug, QueryableByName)]
struct TableNameRow {
    #[diesel(sql_type = Text)]
    table_name: String,
}

#[derive(Debug, Clone)]
pub struct DieselStorageProbe {
    pool: DbPool,
}

impl DieselStorageProbe {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn is_collection_table(name: &str) -> bool {
    Collection::ALL.iter().any(|collection| collection.as_str() == name)
}

#[async_trait]
impl StorageProbe for DieselStorageProbe {
    async fn probe(&self) -> Result<StorageStatus, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let database = diesel::sql_query("SELECT current_database()::text AS name")
            .get_result::<DatabaseNameRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let tables: Vec<TableNameRow> = diesel::sql_query(
            "SELECT table_name::text AS table_name \
             FROM information_schema.tables \
             WHERE table_schema = current_schema() \
             ORDER BY table_name",
        )
        .load(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(StorageStatus {
            backend: "postgres",
            database_name: Some(database.name),
            collections: tables
                .into_iter()
                .map(|row| row.table_name)
                .filter(|name| is_collection_table(name))
                .collect(),
        })
    }
}
