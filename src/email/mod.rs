//! Email sending functionality module
//!
//! Best-effort transactional mail over SMTP using lettre. Callers get a plain
//! success flag; failures are logged and swallowed here.

mod error;
mod service;
pub mod templates;
mod transport;
mod types;

pub use error::EmailError;
pub use service::EmailService;
pub use transport::{MailTransport, SmtpMailTransport};
pub use types::{EmailConfig, EmailMessage};

#[cfg(test)]
pub use transport::MockMailTransport;
