// ABOUTME: Axum HTTP testing utilities for integration tests
// ABOUTME: Drives routers through tower's oneshot without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Builds and executes HTTP requests against an Axum router.
pub struct TestRequest {
    method: Method,
    uri: String,
    body: Option<String>,
}

impl TestRequest {
    /// Create a GET request
    #[allow(dead_code)]
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_owned(),
            body: None,
        }
    }

    /// Create a POST request
    #[allow(dead_code)]
    pub fn post(uri: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_owned(),
            body: None,
        }
    }

    /// Attach a raw body, sent with a JSON content type
    #[allow(dead_code)]
    pub fn raw_json(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self
    }

    /// Attach a serialized JSON body
    #[allow(dead_code)]
    pub fn json<T: serde::Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_json::to_string(data).expect("failed to serialize body"));
        self
    }

    /// Execute the request against the router
    pub async fn send(self, app: Router) -> TestResponse {
        let has_body = self.body.is_some();
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if has_body {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("failed to build request");

        let response = app.oneshot(request).await.expect("failed to send request");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body")
            .to_vec();

        TestResponse { status, body }
    }
}

/// A fully buffered response for assertions.
pub struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    /// Response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Deserialize the body as JSON
    #[allow(dead_code)]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body is not the expected JSON")
    }

    /// Parse the body as a JSON value
    #[allow(dead_code)]
    pub fn json_value(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}
