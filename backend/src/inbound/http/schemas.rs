//! OpenAPI schema definitions for domain and form types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their serialised shape for the generated document.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A downstream dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected server error.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "unauthorized")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "login required")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ActionState`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ActionState)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ActionStateSchema {
    /// Validation messages keyed by form field (`customerId`, `amount`,
    /// `status`); absent for store failures.
    #[schema(example = json!({ "amount": ["Please enter an amount greater than $0."] }))]
    errors: Option<BTreeMap<String, Vec<String>>>,
    /// Summary message.
    #[schema(example = "Missing Fields. Failed to Create Invoice.")]
    message: String,
}

/// Submitted invoice form (`application/x-www-form-urlencoded`).
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct InvoiceFormBody {
    /// Referenced customer.
    #[schema(example = "3958dc9e-712f-4377-85e9-fec4b6a6442a")]
    customer_id: String,
    /// Amount in major units, greater than zero.
    #[schema(example = "15.50")]
    amount: String,
    /// `pending` or `paid`.
    #[schema(example = "pending")]
    status: String,
}

/// Submitted sign-in form (`application/x-www-form-urlencoded`).
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LoginFormBody {
    /// Account email.
    #[schema(example = "user@nextmail.com")]
    email: String,
    /// Account password.
    #[schema(format = Password)]
    password: String,
}

/// OpenAPI schema for [`crate::inbound::http::auth::SignInFailure`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::auth::SignInFailure)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct SignInFailureSchema {
    /// `Invalid credentials.` or `Something went wrong.`
    #[schema(example = "Invalid credentials.")]
    message: String,
}
