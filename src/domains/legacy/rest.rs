use axum::{
  response::Json as JsonResponse,
  routing::{post, Router},
};

use crate::{models::StatusMessage, state::SharedAppState};

pub const FEEDBACK_DEPRECATED_MESSAGE: &str = "Feedback endpoint is not available in this trimmed build.";
pub const CONTACT_DEPRECATED_MESSAGE: &str = "Contact endpoint is not available in this trimmed build.";

/// Feedback and contact forms still post here; both are acknowledged without
/// reading the body.
pub fn legacy_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/feedback", post(feedback_handler))
    .route("/contact", post(contact_handler))
}

pub async fn feedback_handler() -> JsonResponse<StatusMessage> {
  JsonResponse(StatusMessage::new("deprecated", FEEDBACK_DEPRECATED_MESSAGE))
}

pub async fn contact_handler() -> JsonResponse<StatusMessage> {
  JsonResponse(StatusMessage::new("deprecated", CONTACT_DEPRECATED_MESSAGE))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{app_unconfigured, post_json};
  use axum::http::StatusCode;
  use serde_json::json;

  #[tokio::test]
  async fn feedback_is_deprecated() {
    let payload = json!({"name": "Ada", "email": "ada@example.com", "feedback": "Nice"});
    let (status, body) = post_json(app_unconfigured(), "/api/feedback", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let response: StatusMessage = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response, StatusMessage::new("deprecated", FEEDBACK_DEPRECATED_MESSAGE));
  }

  #[tokio::test]
  async fn contact_is_deprecated() {
    let payload = json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"});
    let (status, body) = post_json(app_unconfigured(), "/api/contact", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let response: StatusMessage = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response, StatusMessage::new("deprecated", CONTACT_DEPRECATED_MESSAGE));
  }
}
