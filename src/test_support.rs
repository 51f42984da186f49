use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use secrecy::SecretString;
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailConfig, EmailService, MockMailTransport},
  state::SharedAppState,
};

pub fn app_unconfigured() -> Router {
  let mut transport = MockMailTransport::new();
  transport.expect_send().never();
  app_with(EmailConfig::default(), transport)
}

pub fn app_with_transport(transport: MockMailTransport) -> Router {
  let config = EmailConfig {
    username: Some("mailer".to_string()),
    password: Some(SecretString::new("secret".to_string())),
    from_email: Some("noreply@example.com".to_string()),
    admin_email: Some("admin@example.com".to_string()),
    ..EmailConfig::default()
  };
  app_with(config, transport)
}

fn app_with(config: EmailConfig, transport: MockMailTransport) -> Router {
  let email_service = EmailService::with_transport(config, Arc::new(transport));
  create_app(SharedAppState::new(email_service))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, "POST", uri, Body::from(body)).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
  send(app, "POST", uri, Body::from(body.to_string())).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  send(app, "GET", uri, Body::empty()).await
}

async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
