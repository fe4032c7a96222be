use crate::error::InputError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// What a client sees for a 500. The error chain only goes to the log.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// The JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match InputError::find(&e) {
            Some(input) => ApiError::BadRequest(input.to_string()),
            None => {
                error!("Request failed: {e:#}");
                ApiError::Internal(INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_input_error_is_bad_request() {
        let e: anyhow::Result<()> = Err(InputError::MissingAmount).context("Unable to insert");
        let api = ApiError::from(e.unwrap_err());
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "The 'amount' field is required");
    }

    #[test]
    fn test_other_error_is_internal() {
        let e: anyhow::Result<()> =
            Err(anyhow::anyhow!("disk on fire")).context("Unable to write /home/me/expenses.json");
        let api = ApiError::from(e.unwrap_err());
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let message = api.message();
        assert_eq!(message, "Internal server error");
        assert!(!message.contains("expenses.json"));
    }
}
