use axum::{
  extract::Path,
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use crate::{
  models::{ErrorDetail, StatusMessage},
  state::SharedAppState,
};

pub const AI_REMOVED_MESSAGE: &str = "AI endpoints have been removed from this deployment.";
pub const AI_GONE_DETAIL: &str = "AI endpoints have been removed from this application.";

pub fn ai_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/ai/health", get(ai_health_handler).post(ai_health_removed_handler))
    .route("/ai/{path}", post(ai_removed_handler))
}

pub async fn ai_health_handler() -> JsonResponse<StatusMessage> {
  JsonResponse(StatusMessage::new("removed", AI_REMOVED_MESSAGE))
}

pub async fn ai_removed_handler(Path(path): Path<String>) -> (StatusCode, JsonResponse<ErrorDetail>) {
  tracing::debug!("Rejected call to removed AI endpoint /api/ai/{}", path);
  gone()
}

pub async fn ai_health_removed_handler() -> (StatusCode, JsonResponse<ErrorDetail>) {
  gone()
}

fn gone() -> (StatusCode, JsonResponse<ErrorDetail>) {
  (
    StatusCode::GONE,
    JsonResponse(ErrorDetail {
      detail: AI_GONE_DETAIL.to_string(),
    }),
  )
}
