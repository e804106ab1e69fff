//! Driven port for invoice persistence.
//!
//! Each method maps to exactly one parameterised statement against the
//! `invoices` table. Adapters never retry and never wrap calls in a
//! transaction.
use async_trait::async_trait;

use crate::domain::{InvoiceId, InvoiceRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by invoice repository adapters.
    pub enum InvoiceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "invoice repository connection failed: {message}",
        /// Statement failed during execution.
        Query { message: String } => "invoice repository query failed: {message}",
    }
}

/// Write access to invoice rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// `INSERT INTO invoices (customer_id, amount, status, date)`.
    ///
    /// The store generates the identifier.
    async fn insert(&self, record: &InvoiceRecord) -> Result<(), InvoiceRepositoryError>;

    /// `UPDATE invoices SET customer_id, amount, status, date WHERE id`.
    ///
    /// Matching no row is not an error.
    async fn update(
        &self,
        id: &InvoiceId,
        record: &InvoiceRecord,
    ) -> Result<(), InvoiceRepositoryError>;

    /// `DELETE FROM invoices WHERE id`.
    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError>;
}

/// Repository used when no database is configured. Accepts every write and
/// stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FixtureInvoiceRepository {
    async fn insert(&self, _record: &InvoiceRecord) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn update(
        &self,
        _id: &InvoiceId,
        _record: &InvoiceRecord,
    ) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{AmountInCents, CustomerId, InvoiceStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn fixture_repository_accepts_every_write() {
        let repo = FixtureInvoiceRepository;
        let record = InvoiceRecord {
            customer_id: CustomerId::new("c1").expect("customer"),
            amount: AmountInCents::from_major_units(Decimal::ONE).expect("amount"),
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"),
        };
        let id = InvoiceId::new("i1").expect("invoice");

        repo.insert(&record).await.expect("insert");
        repo.update(&id, &record).await.expect("update");
        repo.delete(&id).await.expect("delete");
    }

    #[test]
    fn errors_render_their_cause() {
        let err = InvoiceRepositoryError::query("relation \"invoices\" does not exist");
        assert_eq!(
            err.to_string(),
            "invoice repository query failed: relation \"invoices\" does not exist"
        );
    }
}
