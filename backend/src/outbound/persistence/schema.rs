//! Diesel table definitions.
//!
//! Must match the externally managed database schema; this crate does not run
//! migrations.

diesel::table! {
    /// Invoices issued to customers.
    invoices (id) {
        /// Primary key, generated by the database.
        id -> Uuid,
        /// Foreign key to `customers.id`.
        customer_id -> Uuid,
        /// Amount in cents.
        amount -> Int4,
        /// `pending` or `paid`.
        status -> Varchar,
        /// Issue date.
        date -> Date,
    }
}
