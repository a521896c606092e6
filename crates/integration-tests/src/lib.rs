//! Integration tests for Un Sold Flower.
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, no
//! socket involved. [`TestClient`] plays the browser: it keeps the session
//! cookie between requests so a test can walk through a whole visit.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p unsold-flower-integration-tests
//! ```

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;

use unsold_flower_storefront::app;
use unsold_flower_storefront::config::StorefrontConfig;
use unsold_flower_storefront::middleware::session::SESSION_COOKIE_NAME;
use unsold_flower_storefront::state::AppState;

/// A response with its body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// In-process client for one visitor.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
    request_id: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A fresh visitor against a fresh application.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
            ..StorefrontConfig::default()
        };
        Self {
            app: app(AppState::new(config)),
            cookie: None,
            request_id: None,
        }
    }

    /// A second visitor sharing this client's application, with no cookie.
    #[must_use]
    pub fn other_visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
            request_id: None,
        }
    }

    /// Send `x-request-id` on every following request, as a proxy would.
    #[must_use]
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or served.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request.expect("valid GET request")).await
    }

    /// Send a POST with an `application/x-www-form-urlencoded` body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or served.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()));
        self.send(request.expect("valid POST request")).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(request_id) = &self.request_id {
            builder = builder.header("x-request-id", request_id);
        }
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// The `name=value` pair of the session cookie in `Set-Cookie`, if set.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_string)
}
