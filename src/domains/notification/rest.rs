use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{RegistrationResponse, SendRegistrationRequest};
use crate::{
  state::{AppState, SharedAppState},
  utils::fallback_display_name,
  AppError,
};

pub fn notification_routes() -> Router<SharedAppState> {
  Router::new().route("/send-registration", post(send_registration_handler))
}

pub async fn send_registration_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<SendRegistrationRequest>, JsonRejection>,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  let Json(payload) = payload?;

  let email = payload
    .email
    .as_deref()
    .map(str::trim)
    .filter(|email| !email.is_empty())
    .ok_or_else(|| AppError::bad_request("email is required"))?;

  let name = payload
    .name
    .as_deref()
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .unwrap_or_else(|| fallback_display_name(email));

  Ok(JsonResponse(state.send_registration(email, name).await))
}
