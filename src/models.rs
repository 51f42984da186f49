use serde::{Deserialize, Serialize};

/// Fixed `{status, message}` body returned by retired endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusMessage {
  pub status: String,
  pub message: String,
}

impl StatusMessage {
  pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      status: status.into(),
      message: message.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDetail {
  pub detail: String,
}
