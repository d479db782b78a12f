//! Outbound mail delivery through the configured SMTP relay.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;
use voiceform_core::models::NotificationMessage;
use voiceform_core::Config;

/// Mail delivery errors. All of them surface to the caller as a single
/// failed dispatch; nothing is retried.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid mail address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to compose message: {0}")]
    Compose(String),

    #[error("Failed to read attachment {path}: {source}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mail relay rejected message: {0}")]
    Transport(String),
}

/// Mail delivery abstraction. The handlers depend on this trait; the
/// production implementation talks SMTP, tests record the messages.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message, attachments included. Suspends until the
    /// relay accepts or rejects it.
    async fn send(&self, message: &NotificationMessage) -> Result<(), DeliveryError>;
}

/// SMTP mailer authenticating with the OAuth2 credential set
/// (sender account + access token via XOAUTH2).
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                anyhow::anyhow!("Failed to configure SMTP relay {}: {}", config.smtp_host, e)
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.oauth_access_token.clone(),
            ))
            .authentication(vec![Mechanism::Xoauth2])
            .build();

        tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            user = %config.email_user,
            "Mail transport initialized (SMTP with STARTTLS, XOAUTH2)"
        );

        Ok(Self { transport })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| DeliveryError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DeliveryError> {
        let from = parse_mailbox(&message.from)?;
        let to = parse_mailbox(&message.to)?;

        let html_part = SinglePart::builder()
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone());
        let mut body = MultiPart::mixed().singlepart(html_part);

        for attachment in &message.attachments {
            let content = tokio::fs::read(&attachment.path_on_disk)
                .await
                .map_err(|source| DeliveryError::Attachment {
                    path: attachment.path_on_disk.display().to_string(),
                    source,
                })?;

            let content_type = ContentType::parse(&attachment.mime_type).map_err(|e| {
                DeliveryError::Compose(format!(
                    "Invalid attachment content type {}: {}",
                    attachment.mime_type, e
                ))
            })?;

            body = body.singlepart(
                Attachment::new(attachment.original_name.clone()).body(content, content_type),
            );
        }

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .multipart(body)
            .map_err(|e| DeliveryError::Compose(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        info!(
            to = %message.to,
            subject = %message.subject,
            attachments = message.attachments.len(),
            "Notification email sent"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 4000,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            database_url: None,
            upload_dir: "uploads".to_string(),
            max_audio_size_bytes: 10 * 1024 * 1024,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            email_user: "relay@example.com".to_string(),
            oauth_client_id: Some("client-id".to_string()),
            oauth_client_secret: Some("client-secret".to_string()),
            oauth_refresh_token: Some("refresh-token".to_string()),
            oauth_access_token: "access-token".to_string(),
        }
    }

    /// Transport construction is pure configuration; no connection is made
    /// until the first send.
    #[test]
    fn from_config_builds_transport() {
        assert!(SmtpMailer::from_config(&test_config()).is_ok());
    }

    #[test]
    fn invalid_address_is_rejected_before_any_network_io() {
        let result = parse_mailbox("No email provided");
        assert!(matches!(result, Err(DeliveryError::InvalidAddress { .. })));
    }

    #[test]
    fn valid_address_parses() {
        assert!(parse_mailbox("someone@example.com").is_ok());
    }
}
