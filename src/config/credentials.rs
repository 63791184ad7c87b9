//! Credential resolution from configuration.
//!
//! The access key is resolved once at startup and handed to the client by
//! constructor; nothing reads it from a global afterwards.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    /// The key, if one was resolved.
    pub fn into_key(self) -> Option<SecureString> {
        match self {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(%reason, "No API credential configured");
                None
            }
        }
    }
}

impl ApiConfig {
    /// Resolve the API key from config or the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment access.
    ///
    /// An explicit, non-empty `api_key` wins over the environment variable.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(key))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("api.api_key is not set and ${} is empty", self.api_key_env),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn explicit_key_wins_over_env() {
        let api = ApiConfig {
            api_key: Some("from-config".to_string()),
            ..ApiConfig::default()
        };
        let status = api.resolve_credential_with(|_| Some("from-env".to_string()));
        let key = status.into_key().unwrap();
        assert_eq!(key.expose(), "from-config");
    }

    #[test]
    fn env_var_named_in_config_is_used() {
        let api = ApiConfig {
            api_key_env: "GEMINI_KEY".to_string(),
            ..ApiConfig::default()
        };
        let status = api.resolve_credential_with(|name| {
            (name == "GEMINI_KEY").then(|| "env-key".to_string())
        });
        assert_eq!(status.into_key().unwrap().expose(), "env-key");
    }

    #[test]
    fn blank_values_are_unconfigured() {
        let api = ApiConfig {
            api_key: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        let status = api.resolve_credential_with(|_| Some(String::new()));
        match status {
            CredentialStatus::Unconfigured { reason } => assert!(reason.contains("$API_KEY")),
            CredentialStatus::Configured(_) => panic!("expected Unconfigured"),
        }
    }
}
