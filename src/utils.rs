use crate::email::{EmailConfig, EmailService};

pub mod error;

pub fn init_email_service() -> EmailService {
  let config = EmailConfig::from_env();

  if config.is_configured() {
    tracing::info!(
      "Email service configured for {}:{} as {:?}",
      config.host,
      config.port,
      config.from_email.as_deref().unwrap_or_default()
    );
  } else {
    tracing::warn!("SMTP_USER, SMTP_PASSWORD or SMTP_FROM_EMAIL missing. Email notifications are disabled.");
  }

  EmailService::new(config)
}

/// Display name used in greetings when the caller did not send one.
pub fn fallback_display_name(email: &str) -> &str {
  email.split('@').next().filter(|local| !local.is_empty()).unwrap_or(email)
}
