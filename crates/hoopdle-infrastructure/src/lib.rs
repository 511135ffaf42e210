pub mod api_client;
pub mod config;

pub use crate::api_client::HttpGameBackend;
pub use crate::config::ClientConfig;
