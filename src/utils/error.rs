use std::any::Any;

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    AppError::new(rejection.status(), rejection.body_text())
  }
}

/// Turns a handler panic into the same JSON error shape as every other failure.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.as_str()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    s
  } else {
    "unknown panic"
  };
  tracing::error!("Handler panicked: {}", detail);

  AppError::internal_server_error("Internal server error occurred").into_response()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_app_error_renders_json_body() {
    let response = AppError::bad_request("email is required").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], "email is required");
    assert_eq!(value["status_code"], 400);
  }

  #[test]
  fn test_panic_response_is_internal_server_error() {
    let response = panic_response(Box::new("boom"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
