//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the invoice form actions, the credentials login and
//! the health probes, together with schema wrappers that describe the wire
//! shape of domain types without deriving `ToSchema` on them.

use crate::inbound::http::schemas::{
    ActionStateSchema, ErrorCodeSchema, ErrorSchema, InvoiceFormBody, LoginFormBody,
    SignInFailureSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the dashboard actions.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Invoice dashboard actions",
        description = "Form-action endpoints for creating, updating and deleting invoices, plus credentials sign-in."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::invoices::create_invoice,
        crate::inbound::http::invoices::update_invoice,
        crate::inbound::http::invoices::delete_invoice,
        crate::inbound::http::auth::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ActionStateSchema,
        InvoiceFormBody,
        LoginFormBody,
        SignInFailureSchema
    )),
    tags(
        (name = "invoices", description = "Invoice form actions"),
        (name = "auth", description = "Credentials sign-in"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
