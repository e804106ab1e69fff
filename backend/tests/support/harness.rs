//! In-process harness and shared world for the dashboard behaviour suites.
//!
//! Each request builds a fresh Actix test service over the same ports and
//! session key, so recorded calls and the session cookie survive between
//! steps. The world owns an Actix system runner because test services spawn
//! local tasks.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use actix_rt::{System, SystemRunner};
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key};
use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::domain::ports::FixtureIdentityProvider;
use backend::domain::{CredentialsSignInService, Error, InvoiceActionsService, TRACE_ID_HEADER};
use backend::inbound::http::auth::login;
use backend::inbound::http::invoices::{create_invoice, delete_invoice, update_invoice};
use backend::inbound::http::state::HttpState;
use backend::outbound::cache::InMemoryRouteCache;
use chrono::{TimeZone, Utc};
use rstest::fixture;
use serde_json::Value;

use super::doubles::{FixedClock, RecordingInvoiceRepository};

pub(crate) struct DashboardWorld {
    runner: SystemRunner,
    key: Key,
    pub(crate) repository: RecordingInvoiceRepository,
    pub(crate) route_cache: Arc<InMemoryRouteCache>,
    pub(crate) session_cookie: Option<Cookie<'static>>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_location: Option<String>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_body: Option<Value>,
}

pub(crate) type SharedWorld = Rc<RefCell<DashboardWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    WorldFixture {
        world: Rc::new(RefCell::new(DashboardWorld {
            runner: System::new(),
            key: Key::generate(),
            repository: RecordingInvoiceRepository::default(),
            route_cache: Arc::new(InMemoryRouteCache::new()),
            session_cookie: None,
            last_status: None,
            last_location: None,
            last_trace_id: None,
            last_body: None,
        })),
    }
}

/// Form submission issued by a step.
pub(crate) struct FormRequest<'a> {
    pub(crate) path: &'a str,
    pub(crate) body: &'a str,
    pub(crate) with_session: bool,
}

fn http_state(ctx: &DashboardWorld) -> HttpState {
    let now = Utc
        .with_ymd_and_hms(2024, 3, 9, 12, 0, 0)
        .single()
        .expect("fixture timestamp");
    HttpState::new(
        Arc::new(InvoiceActionsService::new(
            Arc::new(ctx.repository.clone()),
            Arc::new(FixedClock(now)),
        )),
        Arc::new(CredentialsSignInService::new(Arc::new(
            FixtureIdentityProvider,
        ))),
        ctx.route_cache.clone(),
    )
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Submit a URL-encoded form and record the response in the world.
pub(crate) fn submit_form(world: &SharedWorld, request: FormRequest<'_>) {
    let FormRequest {
        path,
        body,
        with_session,
    } = request;
    let mut ctx = world.borrow_mut();
    let state = web::Data::new(http_state(&ctx));
    let key = ctx.key.clone();
    let cookie = if with_session {
        ctx.session_cookie.clone()
    } else {
        None
    };
    let body = body.to_owned();

    let (status, location, trace_id, new_cookie, json) = ctx.runner.block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::FormConfig::default().error_handler(|err, _req| {
                    Error::invalid_request(format!("invalid form body: {err}")).into()
                }))
                .wrap(session_middleware(key))
                .wrap(Trace)
                .service(login)
                .service(create_invoice)
                .service(update_invoice)
                .service(delete_invoice),
        )
        .await;

        let mut request = actix_test::TestRequest::post()
            .uri(path)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body);
        if let Some(cookie) = cookie {
            request = request.cookie(cookie);
        }
        let response = actix_test::call_service(&app, request.to_request()).await;

        let status = response.status().as_u16();
        let header_value = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned)
        };
        let location = header_value(header::LOCATION.as_str());
        let trace_id = header_value(TRACE_ID_HEADER);
        let new_cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned);
        let bytes = actix_test::read_body(response).await;
        let json = serde_json::from_slice::<Value>(&bytes).ok();
        (status, location, trace_id, new_cookie, json)
    });

    if new_cookie.is_some() {
        ctx.session_cookie = new_cookie;
    }
    ctx.last_status = Some(status);
    ctx.last_location = location;
    ctx.last_trace_id = trace_id;
    ctx.last_body = json;
}

/// Sign in as the fixture account and keep the session cookie.
pub(crate) fn sign_in(world: &SharedWorld) {
    submit_form(
        world,
        FormRequest {
            path: "/login",
            body: "email=user%40nextmail.com&password=123456",
            with_session: false,
        },
    );
    assert_eq!(world.borrow().last_status, Some(303), "fixture sign-in");
}
