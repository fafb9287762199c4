pub mod api;
pub mod assets;
pub mod config;
pub mod content;
pub mod dashboards;
pub mod deploy;
pub mod driver;
pub mod error;
pub mod flow;
pub mod interfaces;
pub mod notify;
pub mod session;

pub use config::PortalConfig;
pub use error::ClientError;
