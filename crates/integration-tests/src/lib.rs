//! Integration tests for the ElectroMart storefront.
//!
//! The full router, middleware included, is driven in-process with
//! `tower::ServiceExt::oneshot`; no listener or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p electromart-integration-tests
//! ```
//!
//! [`TestClient`] keeps the session cookie between requests the way a
//! browser would, so multi-step flows (add to cart, checkout, confirmation)
//! share one session.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use electromart_storefront::app;
use electromart_storefront::config::StorefrontConfig;
use electromart_storefront::state::AppState;
use tower::ServiceExt;

/// Client address sent on every request; the checkout rate limiter keys on it.
pub const CLIENT_IP: &str = "203.0.113.7";

/// Largest body the tests will read.
const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// A finished response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// A header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// In-process client for one browser session.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
    client_ip: String,
}

impl TestClient {
    /// Storefront with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// Storefront with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the search index cannot be built.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("Failed to build app state");
        Self {
            router: app(state),
            cookie: None,
            client_ip: CLIENT_IP.to_string(),
        }
    }

    /// Another browser on the same server: shares the session store, not the cookie.
    #[must_use]
    pub fn fresh_session(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
            client_ip: self.client_ip.clone(),
        }
    }

    /// Send requests from a different client address.
    #[must_use]
    pub fn from_ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    /// `GET` a path.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// `POST` a urlencoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Follow a redirect response with a `GET`, dropping any fragment.
    ///
    /// # Panics
    ///
    /// Panics if the response has no `Location` header.
    pub async fn follow(&mut self, response: &TestResponse) -> TestResponse {
        let location = response
            .location()
            .expect("Response is not a redirect");
        let location = location.split('#').next().unwrap_or(location).to_string();
        self.get(&location).await
    }

    async fn send(&mut self, method: Method, uri: &str, form: Option<String>) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", self.client_ip.as_str());
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.as_str());
        }

        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `name=value` of the session cookie set by a response, if any.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let prefix = format!("{}=", electromart_storefront::middleware::session::SESSION_COOKIE_NAME);
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&prefix))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
