use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MissingField(String),

    #[error("Unknown session_id")]
    UnknownSession,

    #[error("{0}")]
    Service(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            AppError::UnknownSession => (StatusCode::BAD_REQUEST, "UNKNOWN_SESSION"),
            AppError::Service(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_ERROR"),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AppError::JsonError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "JSON_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_request() {
        let (status, code) = AppError::MissingField("No text provided".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "MISSING_FIELD");

        let (status, _) = AppError::UnknownSession.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_error_keeps_message_verbatim() {
        let err = AppError::Service("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
