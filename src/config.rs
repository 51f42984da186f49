use std::env;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub allowed_origin: String,
}

impl ServerConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let port = match lookup("PORT") {
      Some(raw) => raw
        .trim()
        .parse()
        .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
      None => DEFAULT_PORT,
    };

    Ok(Self {
      host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
      port,
      allowed_origin: lookup("VITE_API_BASE_ORIGIN").unwrap_or_else(|| "*".to_string()),
    })
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if self.allowed_origin == "*" {
      return Ok(layer.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(&self.allowed_origin)
      .with_context(|| format!("VITE_API_BASE_ORIGIN is not a valid origin: {:?}", self.allowed_origin))?;
    Ok(layer.allow_origin(origin))
  }
}
