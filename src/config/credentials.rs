//! Credential resolution from configuration.
//!
//! Keys come from the config file first, then from the environment
//! variable named in the same section.

use super::types::{ChatConfig, WeatherConfig};

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
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

/// Status of credential resolution for an API.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialStatus {
    /// Key resolved successfully.
    Configured(SecureString),
    /// Key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, CredentialStatus::Configured(_))
    }
}

/// Resolve a key from an explicit value or an environment variable.
///
/// Called on demand and not cached, so a key exported after startup
/// is picked up by the next request.
pub fn resolve_key(explicit: Option<&str>, env_var: &str) -> CredentialStatus {
    if let Some(key) = explicit {
        if !key.is_empty() {
            return CredentialStatus::Configured(SecureString::new(key));
        }
    }

    match std::env::var(env_var) {
        Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
        _ => CredentialStatus::Unconfigured {
            reason: format!("api_key is not set and ${} is empty", env_var),
        },
    }
}

impl ChatConfig {
    pub fn resolve_credential(&self) -> CredentialStatus {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

impl WeatherConfig {
    pub fn resolve_credential(&self) -> CredentialStatus {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key");

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn explicit_key_wins() {
        let status = resolve_key(Some("from-config"), "MVI_SAMPLES_TEST_UNSET_VAR_1");
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("from-config"))
        );
    }

    #[test]
    fn empty_explicit_key_falls_back_to_env() {
        let status = resolve_key(Some(""), "MVI_SAMPLES_TEST_UNSET_VAR_2");
        assert!(!status.is_configured());
    }

    #[test]
    fn missing_key_reports_env_var() {
        let config = ChatConfig {
            api_key: None,
            api_key_env: "MVI_SAMPLES_TEST_UNSET_VAR_3".to_string(),
            ..ChatConfig::default()
        };

        match config.resolve_credential() {
            CredentialStatus::Unconfigured { reason } => {
                assert!(reason.contains("MVI_SAMPLES_TEST_UNSET_VAR_3"));
            }
            other => panic!("Expected Unconfigured, got {other:?}"),
        }
    }
}
