//! Fixed HTML and plain-text bodies for the notification emails.
//!
//! Every builder is pure: it takes the timestamp to stamp into the message, so
//! output is reproducible. Caller-supplied values are HTML-escaped in the HTML
//! body and embedded verbatim in the plain-text body.

use askama_escape::{escape, Html};
use chrono::{DateTime, Utc};

pub const PRODUCT_NAME: &str = "TrackMyProgress";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FOOTER_HTML: &str = r#"<hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">
      <p style="color: #999; font-size: 12px; text-align: center;">
        &copy; 2025 TrackMyProgress. All rights reserved.
      </p>"#;

const FOOTER_TEXT: &str = "© 2025 TrackMyProgress. All rights reserved.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
  pub subject: String,
  pub html: String,
  pub text: String,
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn escape_html(raw: &str) -> String {
  escape(raw, Html).to_string()
}

fn wrap_html(inner: &str) -> String {
  format!(
    r#"<html>
  <body style="font-family: Arial, sans-serif; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; border-radius: 8px;">
{inner}
    </div>
  </body>
</html>"#
  )
}

pub fn login_notification(user_email: &str, user_name: &str, at: DateTime<Utc>) -> EmailContent {
  let time = format_timestamp(at);
  let name = escape_html(user_name);
  let email = escape_html(user_email);

  let html = wrap_html(&format!(
    r#"      <h2 style="color: #0066cc;">Welcome Back! 🎉</h2>
      <p>Hi <strong>{name}</strong>,</p>
      <p>You've successfully logged into <strong>{PRODUCT_NAME}</strong>.</p>
      <p><strong>Login Details:</strong></p>
      <ul>
        <li>Email: {email}</li>
        <li>Time: {time} UTC</li>
      </ul>
      <p style="color: #666; font-size: 12px;">
        If you didn't perform this login, please contact our support team immediately.
      </p>
      {FOOTER_HTML}"#
  ));

  let text = format!(
    "Welcome Back!\n\n\
     Hi {user_name},\n\n\
     You've successfully logged into {PRODUCT_NAME}.\n\n\
     Login Details:\n\
     - Email: {user_email}\n\
     - Time: {time} UTC\n\n\
     If you didn't perform this login, please contact our support team immediately.\n\n\
     {FOOTER_TEXT}\n"
  );

  EmailContent {
    subject: format!("{PRODUCT_NAME} - Login Notification ✅"),
    html,
    text,
  }
}

pub fn feedback_notification(user_email: &str, user_name: &str, feedback: &str, at: DateTime<Utc>) -> EmailContent {
  let time = format_timestamp(at);
  let name = escape_html(user_name);
  let email = escape_html(user_email);
  let body = escape_html(feedback);

  let html = wrap_html(&format!(
    r#"      <h2 style="color: #0066cc;">📝 New User Feedback</h2>
      <p><strong>From:</strong> {name} ({email})</p>
      <p><strong>Date:</strong> {time} UTC</p>
      <hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">
      <h3>Feedback Message:</h3>
      <div style="background-color: #f5f5f5; padding: 15px; border-left: 4px solid #0066cc; border-radius: 4px;">
        <p style="margin: 0; white-space: pre-wrap;">{body}</p>
      </div>
      <hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">
      <p style="color: #999; font-size: 12px;">
        Please reply to {email} to respond to this feedback.
      </p>"#
  ));

  // Feedback is appended raw so its own line breaks survive.
  let text = format!(
    "New User Feedback\n\n\
     From: {user_name} ({user_email})\n\
     Date: {time} UTC\n\n\
     Feedback Message:\n\
     {feedback}\n\n\
     Please reply to {user_email} to respond to this feedback.\n"
  );

  EmailContent {
    subject: format!("{PRODUCT_NAME} - New Feedback from {user_name}"),
    html,
    text,
  }
}

pub fn contact_response(user_email: &str, user_name: &str) -> EmailContent {
  let name = escape_html(user_name);
  let email = escape_html(user_email);

  let html = wrap_html(&format!(
    r#"      <h2 style="color: #0066cc;">Thank You for Contacting Us! 💌</h2>
      <p>Hi <strong>{name}</strong>,</p>
      <p>Thank you for reaching out to <strong>{PRODUCT_NAME}</strong>!</p>
      <p>We have received your message and our team will get back to you as soon as possible.</p>
      <p style="color: #666; font-size: 14px;">
        <strong>Your Email:</strong> {email}
      </p>
      <p style="color: #666; font-size: 14px;">
        <strong>Response Time:</strong> Usually within 24-48 hours
      </p>
      {FOOTER_HTML}"#
  ));

  let text = format!(
    "Thank You for Contacting Us!\n\n\
     Hi {user_name},\n\n\
     Thank you for reaching out to {PRODUCT_NAME}!\n\n\
     We have received your message and our team will get back to you as soon as possible.\n\n\
     Your Email: {user_email}\n\
     Response Time: Usually within 24-48 hours\n\n\
     {FOOTER_TEXT}\n"
  );

  EmailContent {
    subject: format!("{PRODUCT_NAME} - Contact Form Received ✅"),
    html,
    text,
  }
}
