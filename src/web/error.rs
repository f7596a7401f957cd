//! Web Error Types
//!
//! Failures that escape a page handler. Remote API errors are not
//! recovered from; they end the request with an error page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::markup::escape;
use crate::client::ClientError;

/// Web layer error types
#[derive(Error, Debug)]
pub enum WebError {
    /// The HR API call failed
    #[error("HR API error: {0}")]
    Client(#[from] ClientError),

    /// No employee with the requested name
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Client(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            WebError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Error</title></head>\
             <body><h2>Something went wrong</h2><p>{message}</p>\
             <p><small>{code} · request {request_id}</small></p><p><a href=\"/\">Back to dashboard</a></p></body></html>",
            message = escape(&self.to_string()),
            code = code,
            request_id = request_id,
        );

        (status, Html(body)).into_response()
    }
}

/// Result type for page handlers
pub type WebResult<T> = Result<T, WebError>;
