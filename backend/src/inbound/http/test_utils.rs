//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::HttpResponse;
use actix_web::cookie::Key;

use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;

/// Session middleware for tests: fresh key per call, cookie named `session`,
/// `Secure` disabled so plain-HTTP test requests keep the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// User id persisted by [`sign_in_fixture_user`].
pub const FIXTURE_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Handler that signs the fixture user into the session; mount it on a test
/// route to obtain a session cookie.
pub async fn sign_in_fixture_user(session: SessionContext) -> Result<HttpResponse, Error> {
    let id = UserId::new(FIXTURE_USER_ID)
        .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
    session.persist_user(&id)?;
    Ok(HttpResponse::NoContent().finish())
}
