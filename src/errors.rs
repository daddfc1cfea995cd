// ABOUTME: Unified error handling for the scale conversion API
// ABOUTME: Defines error codes, the application error type, and the HTTP error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error codes, the application error type, and HTTP response formatting.
//!
//! All user errors (unrecognized names, missing fields, ambiguous or absent
//! dimension sets, unparseable bodies) surface as HTTP 400 with a message
//! naming the specific violation. Anything else is a 500 with a generic
//! message; the detail is logged for operators and never returned to the
//! caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// An unrecognized scale name was supplied
    #[serde(rename = "INVALID_SCALE")]
    InvalidScale,
    /// An unrecognized measurement name was supplied
    #[serde(rename = "INVALID_MEASUREMENT")]
    InvalidMeasurement,
    /// A supplied dimension axis is missing its value or measurement
    #[serde(rename = "INVALID_DIMENSION")]
    InvalidDimension,
    /// The request envelope failed validation
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed,
    /// The request body could not be parsed into the expected shape
    #[serde(rename = "MALFORMED_INPUT")]
    MalformedInput,
    /// Anything unanticipated
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// HTTP status code for this error
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidScale
            | Self::InvalidMeasurement
            | Self::InvalidDimension
            | Self::ValidationFailed
            | Self::MalformedInput => 400,
            Self::InternalError => 500,
        }
    }

    /// Standard HTTP reason phrase for this error's status code
    pub const fn reason(self) -> &'static str {
        match self.http_status() {
            400 => "Bad Request",
            _ => "Internal Server Error",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request path that produced the failure, when known
    pub uri: Option<String>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            uri: None,
        }
    }

    /// Attach the request path that produced this error
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Unrecognized scale name
    pub fn invalid_scale(name: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidScale,
            format!("{name} is not a valid Scale name."),
        )
    }

    /// Unrecognized measurement name
    pub fn invalid_measurement(name: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidMeasurement,
            format!("{name} is not a valid measurement."),
        )
    }

    /// Supplied dimension axis missing its value or measurement
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDimension, message)
    }

    /// Request envelope validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Unparseable request body
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedInput, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// HTTP status code for this error
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// The JSON body returned to clients when a request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Description of the specific violation
    pub message: String,
    /// Numeric HTTP status code
    pub error_code: u16,
    /// Standard HTTP reason phrase for the status code
    pub error_reason: String,
    /// Formatted capture time of the failure
    pub timestamp: String,
    /// Request path that produced the failure
    pub uri: String,
}

impl ErrorDetails {
    /// Build the error body for a failure on the given request path.
    pub fn from_error(error: &AppError) -> Self {
        Self {
            message: error.message.clone(),
            error_code: error.http_status(),
            error_reason: error.code.reason().to_owned(),
            timestamp: Utc::now()
                .format("%A, %d-%b-%Y %H:%M:%S GMT%z")
                .to_string(),
            uri: error.uri.clone().unwrap_or_else(|| "unavailable".to_owned()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::InternalError {
            // Full detail stays server-side; the client sees a generic reason.
            error!("Unexpected failure: {}", self.message);
            let sanitized = Self {
                message: "An internal error occurred.".to_owned(),
                ..self
            };
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            return (status, Json(ErrorDetails::from_error(&sanitized))).into_response();
        }

        error!("Request failed: {}", self.message);
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorDetails::from_error(&self))).into_response()
    }
}
