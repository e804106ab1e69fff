//! Driving port for the invoice form actions.
//!
//! Inbound adapters hand over the raw form and receive either the redirect to
//! perform or the state to re-render the form with.

use async_trait::async_trait;

use crate::domain::{ActionRedirect, ActionState, FormPayload, InvoiceId};

/// Create, update and delete invoices from submitted forms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceCommand: Send + Sync {
    /// Validate `form` and insert a new invoice dated today.
    async fn create_invoice(&self, form: &FormPayload) -> Result<ActionRedirect, ActionState>;

    /// Validate `form` and overwrite the invoice `id`, re-stamping its date.
    async fn update_invoice(
        &self,
        id: &InvoiceId,
        form: &FormPayload,
    ) -> Result<ActionRedirect, ActionState>;

    /// Remove the invoice `id`.
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<ActionRedirect, ActionState>;
}
