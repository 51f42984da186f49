use std::sync::Arc;

use chrono::Utc;
use lettre::{
  message::{Mailbox, MultiPart, SinglePart},
  Message,
};

use crate::email::{
  error::EmailError,
  templates::{self, EmailContent},
  transport::{MailTransport, SmtpMailTransport},
  types::{EmailConfig, EmailMessage},
};

/// Best-effort notification sender.
///
/// All public send methods report a plain `bool`; failures are logged here and
/// never returned to the caller.
pub struct EmailService {
  config: EmailConfig,
  transport: Arc<dyn MailTransport>,
}

impl EmailService {
  pub fn new(config: EmailConfig) -> Self {
    let transport = Arc::new(SmtpMailTransport::from_config(&config));
    Self::with_transport(config, transport)
  }

  pub fn with_transport(config: EmailConfig, transport: Arc<dyn MailTransport>) -> Self {
    Self { config, transport }
  }

  #[cfg(test)]
  pub(crate) fn config(&self) -> &EmailConfig {
    &self.config
  }

  pub fn is_configured(&self) -> bool {
    self.config.is_configured()
  }

  pub async fn send_email(
    &self,
    to_email: &str,
    subject: &str,
    html_content: &str,
    text_content: Option<&str>,
  ) -> bool {
    let mut message = EmailMessage::new(to_email, subject, html_content);
    message.text_body = text_content.map(str::to_string);
    self.send_message(&message).await
  }

  pub(crate) async fn send_message(&self, message: &EmailMessage) -> bool {
    match self.deliver(message).await {
      Ok(()) => {
        tracing::info!("Email sent to {}", message.to);
        true
      }
      Err(EmailError::NotConfigured) => {
        tracing::warn!("Email service not configured. Skipping email send.");
        false
      }
      Err(e) => {
        tracing::error!("Failed to send email to {}: {}", message.to, e);
        false
      }
    }
  }

  pub async fn send_login_notification(&self, user_email: &str, user_name: &str) -> bool {
    let content = templates::login_notification(user_email, user_name, Utc::now());
    self.send_content(user_email, content).await
  }

  pub async fn send_feedback_notification(&self, user_email: &str, user_name: &str, feedback: &str) -> bool {
    let Some(admin_email) = self.config.admin_email.as_deref() else {
      tracing::warn!("ADMIN_EMAIL is not set. Dropping feedback from {}.", user_email);
      return false;
    };

    let content = templates::feedback_notification(user_email, user_name, feedback, Utc::now());
    self.send_content(admin_email, content).await
  }

  pub async fn send_contact_response(&self, user_email: &str, user_name: &str) -> bool {
    let content = templates::contact_response(user_email, user_name);
    self.send_content(user_email, content).await
  }

  async fn send_content(&self, to_email: &str, content: EmailContent) -> bool {
    let message = EmailMessage::new(to_email, content.subject, content.html).with_text(content.text);
    self.send_message(&message).await
  }

  async fn deliver(&self, message: &EmailMessage) -> Result<(), EmailError> {
    let email = self.build_message(message)?;
    self.transport.send(email).await
  }

  fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailError> {
    if !self.is_configured() {
      return Err(EmailError::NotConfigured);
    }

    let recipient = message.to.trim();
    if recipient.is_empty() {
      return Err(EmailError::MissingRecipient);
    }

    let from_email = self.config.from_email.as_deref().unwrap_or_default();
    let from = Mailbox::new(Some(self.config.from_name.clone()), from_email.parse()?);

    let builder = Message::builder()
      .from(from)
      .to(recipient.parse()?)
      .subject(message.subject.as_str());

    let html = SinglePart::html(message.html_body.clone());

    let email = match message.text_body.as_deref() {
      Some(text) if !text.is_empty() => builder.multipart(
        MultiPart::alternative()
          .singlepart(SinglePart::plain(text.to_string()))
          .singlepart(html),
      )?,
      _ => builder.singlepart(html)?,
    };

    Ok(email)
  }
}
