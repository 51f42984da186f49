use axum::{extract::Request, Router};
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::{ai::rest::ai_routes, legacy::rest::legacy_routes, notification::rest::notification_routes},
  state::SharedAppState,
  utils::error::panic_response,
};

/// Router with CORS open to any origin.
pub fn create_app(state: SharedAppState) -> Router {
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
  create_app_with_cors(state, cors)
}

pub fn create_app_with_cors(state: SharedAppState, cors: CorsLayer) -> Router {
  let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
    let uri = request.uri().to_string();
    tracing::info_span!("http_request", method = ?request.method(), uri)
  });

  Router::new()
    .nest(
      "/api",
      ai_routes().merge(legacy_routes()).merge(notification_routes()),
    )
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(cors)
    .layer(trace_layer)
    .with_state(state)
}
