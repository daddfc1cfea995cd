// ABOUTME: The scale conversion route - accepts a ScalerData envelope and fills in missing fields
// ABOUTME: Maps body binding failures and validation failures to structured 400 error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `POST /scale`: either full-size or model measurements are passed in; the
//! service fills in the other set. A request that binds or validates badly
//! comes back as a 400 with an [`ErrorDetails`](crate::errors::ErrorDetails)
//! body carrying the request path.

use crate::errors::AppError;
use crate::models::ScalerData;
use crate::service::ScalerService;
use axum::extract::rejection::JsonRejection;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

/// Scale conversion routes
pub struct ScaleRoutes;

impl ScaleRoutes {
    /// Create the scale conversion routes
    pub fn routes() -> Router {
        Router::new().route("/scale", post(Self::handle_scale))
    }

    /// Handle a conversion request. The supplied dimension set is echoed as
    /// given and the missing one is computed.
    async fn handle_scale(
        OriginalUri(uri): OriginalUri,
        payload: Result<Json<ScalerData>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let path = uri.path().to_owned();

        let Json(data) = payload.map_err(|rejection| Self::bind_error(&rejection, &path))?;
        debug!("scaler_data={data}");

        let completed = ScalerService::new()
            .supply_missing_fields(data)
            .map_err(|e| e.with_uri(&path))?;

        Ok((StatusCode::OK, Json(completed)).into_response())
    }

    /// Translate a body binding failure into the error taxonomy. A dimension
    /// axis missing its value or measurement is reported as an invalid
    /// dimension; everything else the deserializer rejects is malformed
    /// input.
    fn bind_error(rejection: &JsonRejection, path: &str) -> AppError {
        let message = rejection.body_text();
        let error = if message.contains("must not be null") {
            AppError::invalid_dimension(message)
        } else {
            AppError::malformed_input(message)
        };
        error.with_uri(path)
    }
}
