// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::{Envelope, GatewayError, ServiceError};
use thiserror::Error;

/// Generic body for failures that have no operation-specific message.
const SERVER_ERROR_MESSAGE: &str = "Server Error";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Service(#[from] ServiceError),

  /// The JSON extractor could not decode the request body.
  #[error("Invalid request body: {0}")]
  InvalidBody(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {0}")]
  Store(#[from] GatewayError),
}

impl AppError {
  fn public_message(&self) -> &'static str {
    match self {
      AppError::Service(err) => err.public_message(),
      AppError::InvalidBody(_) => INVALID_BODY_MESSAGE,
      AppError::Config(_) | AppError::Store(_) => SERVER_ERROR_MESSAGE,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Service(ServiceError::Validation(_)) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
      // Malformed ids are reported as not found.
      AppError::Service(ServiceError::InvalidId) => StatusCode::NOT_FOUND,
      AppError::Service(ServiceError::Storage { .. }) | AppError::Config(_) | AppError::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; only the public message leaves the process.
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(Envelope::<()>::failure(self.public_message()))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
