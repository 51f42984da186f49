use std::sync::Arc;

use crate::{
  domains::notification::{
    model::RegistrationResponse,
    service::{NotificationService, NotificationServiceImpl},
  },
  email::EmailService,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_registration(
    &self,
    email: &str,
    name: &str,
  ) -> impl std::future::Future<Output = RegistrationResponse> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub notification_service: Arc<NotificationServiceImpl>,
}

impl SharedAppState {
  pub fn new(email_service: EmailService) -> Self {
    let email_service = Arc::new(email_service);
    let notification_service = Arc::new(NotificationServiceImpl::new(email_service));

    Self { notification_service }
  }
}

impl AppState for SharedAppState {
  async fn send_registration(&self, email: &str, name: &str) -> RegistrationResponse {
    self.notification_service.send_registration(email, name).await
  }
}
