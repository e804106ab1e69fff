//! Domain primitives, actions and ports.
//!
//! Purpose: define the strongly typed invoice and sign-in model used by the
//! HTTP and persistence adapters, plus the services that implement the form
//! actions. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - Invoice types, the shared form schema and the invoice action service.
//! - Sign-in credentials, outcomes and the credentials sign-in service.

pub mod auth;
pub mod error;
pub mod form;
pub mod invoice;
pub mod invoice_actions;
pub mod invoice_form;
pub mod ports;
pub mod route_path;
pub mod sign_in;
pub mod trace_id;
pub mod user;

pub use self::auth::{AuthErrorKind, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::form::FormPayload;
pub use self::invoice::{
    AmountError, AmountInCents, CustomerId, InvoiceFields, InvoiceId, InvoiceRecord,
    InvoiceStatus, InvoiceValidationError, ParseInvoiceStatusError,
};
pub use self::invoice_actions::{ActionState, InvoiceActionsService};
pub use self::invoice_form::{
    FieldErrors, INVOICE_FORM_SCHEMA, InvoiceField, InvoiceFormSchema, MISSING_FIELDS_MESSAGE,
};
pub use self::route_path::{
    ActionRedirect, DASHBOARD_ROUTE, INVOICES_ROUTE, RoutePath, RoutePathValidationError,
};
pub use self::sign_in::{AuthOutcome, AuthRejection, CREDENTIALS_PROVIDER, CredentialsSignInService};
pub use self::trace_id::TraceId;
pub use self::user::{UserId, UserIdValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
