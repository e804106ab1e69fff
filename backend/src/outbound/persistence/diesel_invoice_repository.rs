//! PostgreSQL-backed `InvoiceRepository` using Diesel.
//!
//! Each method issues one statement built with Diesel's query builder, so
//! every value is bound as a parameter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{InvoiceId, InvoiceRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::InvoiceColumns;
use super::pool::DbPool;
use super::schema::invoices;

/// Diesel-backed invoice repository.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, InvoiceRepositoryError> {
    Uuid::parse_str(raw).map_err(|err| {
        InvoiceRepositoryError::query(format!("invalid input syntax for type uuid in {field}: {err}"))
    })
}

fn to_columns(record: &InvoiceRecord) -> Result<InvoiceColumns<'_>, InvoiceRepositoryError> {
    Ok(InvoiceColumns {
        customer_id: parse_uuid("customer_id", record.customer_id.as_ref())?,
        amount: record.amount.value(),
        status: record.status.as_str(),
        date: record.date,
    })
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn insert(&self, record: &InvoiceRecord) -> Result<(), InvoiceRepositoryError> {
        let columns = to_columns(record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(invoices::table)
            .values(&columns)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &InvoiceId,
        record: &InvoiceRecord,
    ) -> Result<(), InvoiceRepositoryError> {
        let id = parse_uuid("id", id.as_ref())?;
        let columns = to_columns(record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(invoices::table.filter(invoices::id.eq(id)))
            .set(&columns)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            debug!(invoice_id = %id, "update matched no invoice");
        }
        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        let id = parse_uuid("id", id.as_ref())?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(invoices::table.filter(invoices::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
