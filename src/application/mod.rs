//! Application layer - Use cases and orchestration

pub mod mail_session;
pub mod manage_config;
pub mod notebook_session;
pub mod prompt;

pub use mail_session::MailSession;
pub use manage_config::ConfigService;
pub use notebook_session::NotebookSession;
