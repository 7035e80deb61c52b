// tests/common/requests.rs

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// Decoded response: status, Set-Cookie headers, JSON body (Null when the
/// body is not JSON) and the raw text.
pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookies: Vec<String>,
    pub body: Value,
    pub text: String,
}

impl TestResponse {
    /// The `name=value` pair of a Set-Cookie header, attributes stripped.
    pub fn cookie_pair(&self, name: &str) -> Option<String> {
        self.set_cookies
            .iter()
            .find(|cookie| cookie.starts_with(&format!("{name}=")))
            .and_then(|cookie| cookie.split(';').next())
            .map(str::to_string)
    }
}

pub struct TestRequest<'a> {
    method: Method,
    path: &'a str,
    body: Option<Value>,
    cookies: Vec<String>,
    accept_language: Option<&'a str>,
}

impl<'a> TestRequest<'a> {
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            body: None,
            cookies: Vec::new(),
            accept_language: None,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches a `name=value` cookie pair.
    pub fn cookie(mut self, pair: &str) -> Self {
        self.cookies.push(pair.to_string());
        self
    }

    pub fn accept_language(mut self, value: &'a str) -> Self {
        self.accept_language = Some(value);
        self
    }

    pub async fn send(self, app: &Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.path);
        if self.body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        if !self.cookies.is_empty() {
            builder = builder.header(header::COOKIE, self.cookies.join("; "));
        }
        if let Some(language) = self.accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }

        let body = match self.body {
            Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
            None => Body::empty(),
        };
        let request = builder.body(body).unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            set_cookies,
            body,
            text,
        }
    }
}

pub async fn get(app: &Router, path: &str) -> TestResponse {
    TestRequest::new(Method::GET, path).send(app).await
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> TestResponse {
    TestRequest::new(Method::POST, path).json(body).send(app).await
}

pub async fn put_json(app: &Router, path: &str, body: Value) -> TestResponse {
    TestRequest::new(Method::PUT, path).json(body).send(app).await
}

pub async fn delete(app: &Router, path: &str) -> TestResponse {
    TestRequest::new(Method::DELETE, path).send(app).await
}
