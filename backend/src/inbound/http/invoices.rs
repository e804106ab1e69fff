//! Invoice form-action handlers.
//!
//! ```text
//! POST /dashboard/invoices               customerId=..&amount=..&status=..
//! POST /dashboard/invoices/{id}/edit     customerId=..&amount=..&status=..
//! POST /dashboard/invoices/{id}/delete
//! ```
//!
//! All three require a signed-in session.

use actix_web::{HttpResponse, post, web};

use crate::domain::{Error, FormPayload, InvoiceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::navigation::action_response;
use crate::inbound::http::schemas::{ActionStateSchema, ErrorSchema, InvoiceFormBody};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn parse_invoice_id(raw: String) -> Result<InvoiceId, Error> {
    InvoiceId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Create an invoice dated today.
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    request_body(content = InvoiceFormBody, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirect to the invoice listing", headers(("Location" = String))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ActionStateSchema),
        (status = 500, description = "Store failure", body = ActionStateSchema)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice"
)]
#[post("/dashboard/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let outcome = state.invoices.create_invoice(&form).await;
    Ok(action_response(state.route_cache.as_ref(), outcome).await)
}

/// Overwrite an invoice's customer, amount and status, re-stamping its date.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/edit",
    params(("id" = String, Path, description = "Invoice identifier")),
    request_body(content = InvoiceFormBody, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirect to the invoice listing", headers(("Location" = String))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ActionStateSchema),
        (status = 500, description = "Store failure", body = ActionStateSchema)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice"
)]
#[post("/dashboard/invoices/{id}/edit")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(path.into_inner())?;
    let outcome = state.invoices.update_invoice(&id, &form).await;
    Ok(action_response(state.route_cache.as_ref(), outcome).await)
}

/// Delete an invoice.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/delete",
    params(("id" = String, Path, description = "Invoice identifier")),
    responses(
        (status = 303, description = "Deleted; redirect to the invoice listing", headers(("Location" = String))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ActionStateSchema)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice"
)]
#[post("/dashboard/invoices/{id}/delete")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(path.into_inner())?;
    let outcome = state.invoices.delete_invoice(&id).await;
    Ok(action_response(state.route_cache.as_ref(), outcome).await)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use std::sync::Arc;

    use crate::domain::ports::{MockInvoiceCommand, MockRouteCache, MockSignInCommand};
    use crate::domain::{ActionRedirect, ActionState, INVOICES_ROUTE, INVOICE_FORM_SCHEMA};
    use crate::inbound::http::test_utils::{sign_in_fixture_user, test_session_middleware};
    use actix_web::cookie::Cookie;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::Value;

    const INVOICE_ID: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
    const VALID_FORM: &str = "customerId=c1&amount=15.50&status=pending";

    fn state(invoices: MockInvoiceCommand, route_cache: MockRouteCache) -> HttpState {
        HttpState::new(
            Arc::new(invoices),
            Arc::new(MockSignInCommand::new()),
            Arc::new(route_cache),
        )
    }

    fn revalidating_cache() -> MockRouteCache {
        let mut cache = MockRouteCache::new();
        cache
            .expect_revalidate_path()
            .withf(|path| path == &INVOICES_ROUTE)
            .times(1)
            .return_once(|_| Ok(()));
        cache
    }

    async fn init(
        state: HttpState,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .route("/test/sign-in", web::post().to(sign_in_fixture_user))
                .service(create_invoice)
                .service(update_invoice)
                .service(delete_invoice),
        )
        .await
    }

    async fn session_cookie(
        app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    ) -> Cookie<'static> {
        let res =
            test::call_service(app, test::TestRequest::post().uri("/test/sign-in").to_request())
                .await;
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    fn form_post(uri: &str, body: &'static str, cookie: Cookie<'static>) -> actix_http::Request {
        test::TestRequest::post()
            .uri(uri)
            .cookie(cookie)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body)
            .to_request()
    }

    #[actix_web::test]
    async fn create_redirects_after_revalidating_listing() {
        let mut invoices = MockInvoiceCommand::new();
        invoices
            .expect_create_invoice()
            .withf(|form| form.get("amount") == Some("15.50"))
            .times(1)
            .return_once(|_| Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE)));
        let app = init(state(invoices, revalidating_cache())).await;
        let cookie = session_cookie(&app).await;

        let res = test::call_service(&app, form_post("/dashboard/invoices", VALID_FORM, cookie))
            .await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/dashboard/invoices")
        );
    }

    #[actix_web::test]
    async fn validation_failure_renders_field_errors() {
        let mut invoices = MockInvoiceCommand::new();
        invoices.expect_create_invoice().return_once(|form| {
            Err(ActionState::invalid(
                INVOICE_FORM_SCHEMA.validate(form).expect_err("invalid form"),
            ))
        });
        let mut cache = MockRouteCache::new();
        cache.expect_revalidate_path().never();
        let app = init(state(invoices, cache)).await;
        let cookie = session_cookie(&app).await;

        let res = test::call_service(
            &app,
            form_post("/dashboard/invoices", "amount=0&status=paid", cookie),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&test::read_body(res).await).expect("json");
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Missing Fields. Failed to Create Invoice.")
        );
        let errors = body.get("errors").expect("errors");
        assert!(errors.get("customerId").is_some());
        assert!(errors.get("amount").is_some());
        assert!(errors.get("status").is_none());
    }

    #[actix_web::test]
    async fn update_passes_path_id_to_the_action() {
        let mut invoices = MockInvoiceCommand::new();
        invoices
            .expect_update_invoice()
            .withf(|id, _| id.as_ref() == INVOICE_ID)
            .times(1)
            .return_once(|_, _| Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE)));
        let app = init(state(invoices, revalidating_cache())).await;
        let cookie = session_cookie(&app).await;

        let res = test::call_service(
            &app,
            form_post(
                "/dashboard/invoices/3958dc9e-712f-4377-85e9-fec4b6a6442a/edit",
                VALID_FORM,
                cookie,
            ),
        )
        .await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn delete_store_failure_is_a_server_error_without_field_errors() {
        let mut invoices = MockInvoiceCommand::new();
        invoices.expect_delete_invoice().return_once(|_| {
            Err(ActionState::failure(
                "Database Error: Failed to Delete Invoice.",
            ))
        });
        let mut cache = MockRouteCache::new();
        cache.expect_revalidate_path().never();
        let app = init(state(invoices, cache)).await;
        let cookie = session_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/invoices/3958dc9e-712f-4377-85e9-fec4b6a6442a/delete")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&test::read_body(res).await).expect("json");
        assert_eq!(
            body,
            serde_json::json!({ "message": "Database Error: Failed to Delete Invoice." })
        );
    }

    #[actix_web::test]
    async fn anonymous_requests_are_rejected_before_the_action_runs() {
        let mut invoices = MockInvoiceCommand::new();
        invoices.expect_create_invoice().never();
        invoices.expect_delete_invoice().never();
        let app = init(state(invoices, MockRouteCache::new())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/invoices")
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload(VALID_FORM)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/invoices/abc/delete")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
