//! Credentials sign-in handler.
//!
//! ```text
//! POST /login  email=user@nextmail.com&password=123456
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Serialize;

use crate::domain::{ActionRedirect, AuthOutcome, DASHBOARD_ROUTE, FormPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::navigation::follow_redirect;
use crate::inbound::http::schemas::{ErrorSchema, LoginFormBody, SignInFailureSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body returned when the provider rejects a sign-in attempt.
#[derive(Debug, Serialize)]
pub struct SignInFailure {
    /// User-facing rejection message.
    pub message: &'static str,
}

/// Sign in with email and password, then redirect to the dashboard.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginFormBody, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in; redirect to the dashboard", headers(
            ("Location" = String),
            ("Set-Cookie" = String, description = "Session cookie")
        )),
        (status = 401, description = "Sign-in rejected", body = SignInFailureSchema),
        (status = 503, description = "Identity provider unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    match state.sign_in.authenticate(&form).await? {
        AuthOutcome::Authenticated(user_id) => {
            session.persist_user(&user_id)?;
            let redirect = ActionRedirect::redirect(DASHBOARD_ROUTE);
            Ok(follow_redirect(state.route_cache.as_ref(), &redirect).await)
        }
        AuthOutcome::Rejected(rejection) => Ok(HttpResponse::Unauthorized().json(SignInFailure {
            message: rejection.message(),
        })),
    }
}
