pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, Defaults, GEMINI_API_BASE};
