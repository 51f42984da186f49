use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SendRegistrationRequest {
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
  Ok,
  Failed,
  Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationResponse {
  pub status: DeliveryStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl RegistrationResponse {
  pub fn sent(delivered: bool) -> Self {
    let status = if delivered {
      DeliveryStatus::Ok
    } else {
      DeliveryStatus::Failed
    };
    Self { status, message: None }
  }

  pub fn skipped() -> Self {
    Self {
      status: DeliveryStatus::Skipped,
      message: Some("Email service not configured".to_string()),
    }
  }
}
