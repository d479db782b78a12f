pub mod mailer;
pub mod notifications;
pub mod upload;
