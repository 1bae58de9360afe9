//! Infrastructure layer - Configuration and mail delivery seams

pub mod config;
pub mod mailer;

pub use config::Config;
pub use mailer::{ConsoleMailer, Headers, MailSender};
