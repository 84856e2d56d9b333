use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilOpsError {
    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Classifier execution failed: {0}")]
    ClassifierExecution(String),

    #[error("Classifier output invalid: {0}")]
    ClassifierOutput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

pub type Result<T> = std::result::Result<T, SoilOpsError>;

impl SoilOpsError {
    /// Message exposed to HTTP callers. Backend faults are reduced to an
    /// opaque string; full detail stays in the server logs.
    fn public_message(&self) -> String {
        match self {
            SoilOpsError::Upload(msg) => msg.clone(),
            SoilOpsError::Multipart(e) => e.to_string(),
            SoilOpsError::ClassifierExecution(_) => "Model execution failed".to_string(),
            SoilOpsError::ClassifierOutput(_) => "Invalid model output".to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SoilOpsError::Upload(_) | SoilOpsError::Multipart(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SoilOpsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (
            status,
            Json(serde_json::json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_are_bad_requests() {
        let err = SoilOpsError::Upload("No file uploaded".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "No file uploaded");
    }

    #[test]
    fn classifier_failures_are_opaque_server_errors() {
        let exec = SoilOpsError::ClassifierExecution("exit status 1: traceback...".into());
        assert_eq!(exec.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(exec.public_message(), "Model execution failed");

        let output = SoilOpsError::ClassifierOutput("not json".into());
        assert_eq!(output.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(output.public_message(), "Invalid model output");
    }
}
