//! Turns action outcomes into HTTP navigation.
//!
//! A successful action yields an [`ActionRedirect`]; this module revalidates
//! the named route and answers `303 See Other`. Actions that stay on the form
//! yield an [`ActionState`], rendered as JSON with `422` for validation
//! failures and `500` for store failures.

use actix_web::http::{StatusCode, header};
use actix_web::HttpResponse;
use tracing::warn;

use crate::domain::ports::RouteCache;
use crate::domain::{ActionRedirect, ActionState};

/// Revalidate the redirect's route, if any, then redirect.
///
/// A failed revalidation is logged; the redirect is still issued because the
/// write has already happened.
pub async fn follow_redirect(route_cache: &dyn RouteCache, redirect: &ActionRedirect) -> HttpResponse {
    if let Some(path) = redirect.revalidate() {
        if let Err(error) = route_cache.revalidate_path(path).await {
            warn!(path = %path, %error, "route revalidation failed");
        }
    }
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, redirect.location().as_str()))
        .finish()
}

/// Render a form action's outcome.
pub async fn action_response(
    route_cache: &dyn RouteCache,
    outcome: Result<ActionRedirect, ActionState>,
) -> HttpResponse {
    match outcome {
        Ok(redirect) => follow_redirect(route_cache, &redirect).await,
        Err(state) => {
            let status = if state.is_validation_failure() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            HttpResponse::build(status).json(state)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockRouteCache, RouteCacheError};
    use crate::domain::{DASHBOARD_ROUTE, FieldErrors, INVOICES_ROUTE};

    fn location(response: &HttpResponse) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[actix_web::test]
    async fn revalidates_before_redirecting() {
        let mut cache = MockRouteCache::new();
        cache
            .expect_revalidate_path()
            .withf(|path| path == &INVOICES_ROUTE)
            .times(1)
            .return_once(|_| Ok(()));

        let response = action_response(
            &cache,
            Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/dashboard/invoices"));
    }

    #[actix_web::test]
    async fn plain_redirect_skips_revalidation() {
        let mut cache = MockRouteCache::new();
        cache.expect_revalidate_path().never();

        let response = follow_redirect(&cache, &ActionRedirect::redirect(DASHBOARD_ROUTE)).await;

        assert_eq!(location(&response), Some("/dashboard"));
    }

    #[actix_web::test]
    async fn cache_failure_still_redirects() {
        let mut cache = MockRouteCache::new();
        cache
            .expect_revalidate_path()
            .return_once(|_| Err(RouteCacheError::backend("unreachable")));

        let response = action_response(
            &cache,
            Ok(ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn validation_failures_are_unprocessable() {
        let cache = MockRouteCache::new();
        let response = action_response(&cache, Err(ActionState::invalid(FieldErrors::default()))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn store_failures_are_server_errors() {
        let cache = MockRouteCache::new();
        let response = action_response(
            &cache,
            Err(ActionState::failure("Database Error: Failed to Delete Invoice.")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
