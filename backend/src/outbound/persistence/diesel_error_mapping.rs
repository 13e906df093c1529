//! Translation of pool and Diesel failures into [`RepositoryError`].

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Pool failures mean the database cannot be reached.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Classify a Diesel error, logging the driver detail at `debug`.
///
/// Only a closed connection counts as unavailability; everything else is a
/// query failure whose detail stays in the logs.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::query("duplicate record")
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_are_connection_failures() {
        let err = map_pool_error(PoolError::checkout("timed out waiting for connection"));
        assert!(matches!(err, RepositoryError::Connection { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[rstest]
    fn not_found_is_a_query_failure() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(err, RepositoryError::query("record not found"));
    }

    #[rstest]
    fn rollback_is_a_query_failure() {
        let err = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert!(!err.is_unavailable());
    }
}
