use std::error::Error;

/// Why a send attempt did not go through.
///
/// This never leaves the email module as an error value; `EmailService` logs it
/// and reports a plain `false` to callers.
#[derive(Debug)]
pub enum EmailError {
  NotConfigured,
  MissingRecipient,
  InvalidAddress(String),
  Build(String),
  Transport(String),
}

impl Error for EmailError {}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::NotConfigured => write!(f, "Email service is not configured"),
      EmailError::MissingRecipient => write!(f, "Recipient address is missing"),
      EmailError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      EmailError::Build(msg) => write!(f, "Failed to build message: {}", msg),
      EmailError::Transport(msg) => write!(f, "SMTP transport error: {}", msg),
    }
  }
}

impl From<lettre::address::AddressError> for EmailError {
  fn from(err: lettre::address::AddressError) -> Self {
    EmailError::InvalidAddress(err.to_string())
  }
}

impl From<lettre::error::Error> for EmailError {
  fn from(err: lettre::error::Error) -> Self {
    EmailError::Build(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for EmailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    EmailError::Transport(err.to_string())
  }
}
