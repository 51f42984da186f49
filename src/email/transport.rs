use async_trait::async_trait;
use lettre::{transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};

use crate::email::{error::EmailError, types::EmailConfig};

/// Hands a fully built message to a mail relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, email: Message) -> Result<(), EmailError>;
}

/// SMTP submission over STARTTLS with password authentication.
///
/// A fresh lettre transport is built for every message and dropped when the
/// send finishes, so each call owns exactly one connection.
pub struct SmtpMailTransport {
  host: String,
  port: u16,
  username: String,
  password: SecretString,
}

impl SmtpMailTransport {
  pub fn new(host: impl Into<String>, port: u16, username: impl Into<String>, password: SecretString) -> Self {
    Self {
      host: host.into(),
      port,
      username: username.into(),
      password,
    }
  }

  pub fn from_config(config: &EmailConfig) -> Self {
    Self::new(
      config.host.clone(),
      config.port,
      config.username.clone().unwrap_or_default(),
      config
        .password
        .clone()
        .unwrap_or_else(|| SecretString::new(String::new())),
    )
  }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
  async fn send(&self, email: Message) -> Result<(), EmailError> {
    let creds = Credentials::new(self.username.clone(), self.password.expose_secret().clone());

    let transporter = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
      .port(self.port)
      .credentials(creds)
      .build();

    transporter.send(email).await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;
  use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    sync::oneshot,
  };

  fn test_message() -> Message {
    Message::builder()
      .from("TrackMyProgress <noreply@example.com>".parse().unwrap())
      .to("user@example.com".parse().unwrap())
      .subject("Transport test")
      .body("hello".to_string())
      .unwrap()
  }

  fn transport_for(port: u16) -> SmtpMailTransport {
    SmtpMailTransport::new("127.0.0.1", port, "mailer", SecretString::new("secret".to_string()))
  }

  /// Accepts one connection, greets, answers EHLO without advertising STARTTLS
  /// and reports once the client hangs up.
  async fn spawn_plaintext_only_peer() -> (u16, oneshot::Receiver<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (closed_tx, closed_rx) = oneshot::channel();

    tokio::spawn(async move {
      let (stream, _) = listener.accept().await.unwrap();
      let (reader, mut writer) = stream.into_split();
      let mut lines = BufReader::new(reader).lines();

      writer.write_all(b"220 localhost ESMTP fake\r\n").await.unwrap();

      while let Ok(Some(line)) = lines.next_line().await {
        let command = line.to_ascii_uppercase();
        let reply: &[u8] = if command.starts_with("EHLO") || command.starts_with("HELO") {
          b"250 localhost\r\n"
        } else if command.starts_with("QUIT") {
          let _ = writer.write_all(b"221 bye\r\n").await;
          break;
        } else {
          b"502 not implemented\r\n"
        };
        if writer.write_all(reply).await.is_err() {
          break;
        }
      }

      let _ = closed_tx.send(());
    });

    (port, closed_rx)
  }

  #[tokio::test]
  async fn test_send_fails_when_connection_is_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = transport_for(port).send(test_message()).await;
    assert!(matches!(result, Err(EmailError::Transport(_))));
  }

  #[tokio::test]
  async fn test_send_fails_without_starttls_and_closes_connection() {
    let (port, closed_rx) = spawn_plaintext_only_peer().await;

    let result = transport_for(port).send(test_message()).await;
    assert!(matches!(result, Err(EmailError::Transport(_))));

    let closed = tokio::time::timeout(Duration::from_secs(5), closed_rx).await;
    assert!(matches!(closed, Ok(Ok(()))), "connection was left open after a failed send");
  }

  #[test]
  fn test_from_config_tolerates_missing_credentials() {
    let transport = SmtpMailTransport::from_config(&EmailConfig::default());
    assert_eq!(transport.host, "smtp.gmail.com");
    assert_eq!(transport.port, 587);
    assert!(transport.username.is_empty());
  }
}
