//! Mapping from pool and Diesel failures to invoice repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::InvoiceRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> InvoiceRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    InvoiceRepositoryError::connection(message)
}

/// Closed connections are connection errors; every other failure, including
/// constraint violations and malformed input, is a query error.
pub(super) fn map_diesel_error(error: DieselError) -> InvoiceRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            InvoiceRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "invoice statement failed");
            InvoiceRepositoryError::query(format!("{kind:?}: {}", info.message()))
        }
        other => {
            debug!(error = %other, "invoice statement failed");
            InvoiceRepositoryError::query(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_are_connection_errors() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            InvoiceRepositoryError::connection("timed out")
        );
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert!(matches!(
            map_diesel_error(error),
            InvoiceRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn foreign_key_violations_are_query_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert or update on table \"invoices\" violates foreign key".to_owned()),
        );
        let mapped = map_diesel_error(error);
        assert!(matches!(mapped, InvoiceRepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("ForeignKeyViolation"));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert!(matches!(
            map_diesel_error(DieselError::NotFound),
            InvoiceRepositoryError::Query { .. }
        ));
    }
}
