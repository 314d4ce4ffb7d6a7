//! Sales Q&A client library (config, HTTP query, session state).
//! Used by the sales-qa TUI binary.

pub mod client;
pub mod config;
pub mod messages;
pub mod session;

pub use client::{Client, QueryError};
pub use config::{default_config_path, ApiSection, Config, ConfigError, UiSection};
pub use session::Session;
