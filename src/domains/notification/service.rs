use std::sync::Arc;

use async_trait::async_trait;

use super::model::RegistrationResponse;
use crate::email::EmailService;

#[async_trait]
pub trait NotificationService: Send + Sync {
  /// Sends the welcome/login notice for a freshly registered user.
  ///
  /// `email` has already been checked for presence by the caller.
  async fn send_registration(&self, email: &str, name: &str) -> RegistrationResponse;
}

pub struct NotificationServiceImpl {
  email_service: Arc<EmailService>,
}

impl NotificationServiceImpl {
  pub fn new(email_service: Arc<EmailService>) -> Self {
    Self { email_service }
  }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
  async fn send_registration(&self, email: &str, name: &str) -> RegistrationResponse {
    if !self.email_service.is_configured() {
      tracing::info!("Skipping registration email for {}: email service not configured", email);
      return RegistrationResponse::skipped();
    }

    let delivered = self.email_service.send_login_notification(email, name).await;
    RegistrationResponse::sent(delivered)
  }
}
