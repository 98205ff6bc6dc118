use lettre::message::{Attachment, Mailbox, MultiPart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::domain::{AppError, DeliveryConfig, OutboundEmail};
use crate::ports::Mailer;

/// Mailer backed by an SMTP relay with STARTTLS and password authentication.
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl SmtpMailer {
    pub fn from_config(config: &DeliveryConfig) -> Self {
        Self {
            host: config.smtp_server.clone(),
            port: config.smtp_port,
            username: config.smtp_user.clone(),
            password: config.smtp_password.clone(),
        }
    }

    /// Assemble the MIME message: a mixed multipart holding the artifact as
    /// a base64 octet-stream attachment.
    fn build_message(email: &OutboundEmail) -> Result<Message, AppError> {
        let from: Mailbox = email.from.parse().map_err(|e| {
            AppError::Mail(format!("Invalid sender address '{}': {}", email.from, e))
        })?;
        let to: Mailbox = email.to.parse().map_err(|e| {
            AppError::Mail(format!("Invalid recipient address '{}': {}", email.to, e))
        })?;

        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| AppError::Mail(format!("Invalid attachment content type: {}", e)))?;
        let attachment = Attachment::new(email.attachment_name.clone())
            .body(email.attachment.clone(), content_type);

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .multipart(MultiPart::mixed().singlepart(attachment))
            .map_err(|e| AppError::Mail(format!("Failed to build message: {}", e)))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        let message = Self::build_message(email)?;

        let creds = Credentials::new(self.username.clone(), self.password.clone());
        let mailer = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| AppError::Mail(format!("Failed to create SMTP transport: {}", e)))?
            .port(self.port)
            .credentials(creds)
            .build();

        mailer
            .send(&message)
            .map_err(|e| AppError::Mail(format!("Failed to send email via SMTP: {}", e)))?;

        Ok(())
    }
}
