//! Invoice form actions: create, update and delete.
//!
//! Each action validates its input, issues one repository call and describes
//! the navigation to perform. Store faults are logged here and replaced with a
//! generic message; they never reach the caller.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::invoice_form::{FieldErrors, INVOICE_FORM_SCHEMA, MISSING_FIELDS_MESSAGE};
use crate::domain::ports::{InvoiceCommand, InvoiceRepository};
use crate::domain::{ActionRedirect, FormPayload, INVOICES_ROUTE, InvoiceId};

const CREATE_FAILED_MESSAGE: &str = "Database Error: Failed to Create Invoice.";
const UPDATE_FAILED_MESSAGE: &str = "Database Error: Failed to Update Invoice.";
const DELETE_FAILED_MESSAGE: &str = "Database Error: Failed to Delete Invoice.";

/// State returned to the form when an action does not redirect.
///
/// `errors` is present only for validation failures.
///
/// # Examples
/// ```
/// use backend::domain::ActionState;
///
/// let state = ActionState::failure("Database Error: Failed to Delete Invoice.");
/// assert!(state.errors.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionState {
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Summary message shown above the form.
    pub message: String,
}

impl ActionState {
    /// Validation failure carrying per-field messages and the shared summary.
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            message: MISSING_FIELDS_MESSAGE.to_owned(),
        }
    }

    /// Failure with a summary message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: message.into(),
        }
    }

    /// Whether the state carries field-level errors.
    pub fn is_validation_failure(&self) -> bool {
        self.errors.is_some()
    }
}

/// Domain service implementing [`InvoiceCommand`] over a repository.
#[derive(Clone)]
pub struct InvoiceActionsService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> InvoiceActionsService<R> {
    /// Create the service. `clock` supplies the date stamped on written rows.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> InvoiceCommand for InvoiceActionsService<R>
where
    R: InvoiceRepository,
{
    async fn create_invoice(&self, form: &FormPayload) -> Result<ActionRedirect, ActionState> {
        let fields = INVOICE_FORM_SCHEMA
            .validate(form)
            .map_err(ActionState::invalid)?;
        let record = fields.into_record(self.clock.utc().date_naive());

        self.repository.insert(&record).await.map_err(|err| {
            warn!(error = %err, "failed to create invoice");
            ActionState::failure(CREATE_FAILED_MESSAGE)
        })?;

        info!(
            customer_id = %record.customer_id,
            amount = record.amount.value(),
            status = %record.status,
            "invoice created"
        );
        Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE))
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        form: &FormPayload,
    ) -> Result<ActionRedirect, ActionState> {
        let fields = INVOICE_FORM_SCHEMA
            .validate(form)
            .map_err(ActionState::invalid)?;
        let record = fields.into_record(self.clock.utc().date_naive());

        self.repository.update(id, &record).await.map_err(|err| {
            warn!(invoice_id = %id, error = %err, "failed to update invoice");
            ActionState::failure(UPDATE_FAILED_MESSAGE)
        })?;

        info!(invoice_id = %id, "invoice updated");
        Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE))
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<ActionRedirect, ActionState> {
        self.repository.delete(id).await.map_err(|err| {
            warn!(invoice_id = %id, error = %err, "failed to delete invoice");
            ActionState::failure(DELETE_FAILED_MESSAGE)
        })?;

        info!(invoice_id = %id, "invoice deleted");
        Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE))
    }
}
