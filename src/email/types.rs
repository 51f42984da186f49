use std::env;

use secrecy::SecretString;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_FROM_NAME: &str = "TrackMyProgress";

/// SMTP settings loaded once at startup.
///
/// Credentials and addresses are optional here; whether they are usable is
/// decided by [`EmailConfig::is_configured`].
#[derive(Debug, Clone)]
pub struct EmailConfig {
  pub host: String,
  pub port: u16,
  pub username: Option<String>,
  pub password: Option<SecretString>,
  pub from_email: Option<String>,
  pub from_name: String,
  pub admin_email: Option<String>,
}

impl Default for EmailConfig {
  fn default() -> Self {
    EmailConfig {
      host: DEFAULT_SMTP_HOST.to_string(),
      port: DEFAULT_SMTP_PORT,
      username: None,
      password: None,
      from_email: None,
      from_name: DEFAULT_FROM_NAME.to_string(),
      admin_email: None,
    }
  }
}

impl EmailConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let port = match lookup("SMTP_PORT") {
      Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid SMTP_PORT {:?}, falling back to {}", raw, DEFAULT_SMTP_PORT);
        DEFAULT_SMTP_PORT
      }),
      None => DEFAULT_SMTP_PORT,
    };

    EmailConfig {
      host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
      port,
      username: lookup("SMTP_USER"),
      password: lookup("SMTP_PASSWORD").map(SecretString::new),
      from_email: lookup("SMTP_FROM_EMAIL"),
      from_name: lookup("SMTP_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
      admin_email: lookup("ADMIN_EMAIL"),
    }
  }

  /// True when username, password and sender address are all present and non-empty.
  pub fn is_configured(&self) -> bool {
    use secrecy::ExposeSecret;

    let filled = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());

    filled(self.username.as_deref())
      && filled(self.password.as_ref().map(|p| p.expose_secret().as_str()))
      && filled(self.from_email.as_deref())
  }
}

/// A single outbound message. Built per send and dropped afterwards.
#[derive(Debug, Clone)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub html_body: String,
  pub text_body: Option<String>,
}

impl EmailMessage {
  pub fn new(to: impl Into<String>, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
    EmailMessage {
      to: to.into(),
      subject: subject.into(),
      html_body: html_body.into(),
      text_body: None,
    }
  }

  pub fn with_text(mut self, text_body: impl Into<String>) -> Self {
    self.text_body = Some(text_body.into());
    self
  }
}
