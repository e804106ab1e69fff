//! Diesel row models. Internal to the persistence adapter.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::invoices;

/// Column values written by both insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = invoices)]
pub(crate) struct InvoiceColumns<'a> {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: &'a str,
    pub date: NaiveDate,
}
