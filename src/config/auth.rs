//! Authentication header building for API requests.

use super::credentials::CredentialStatus;
use super::types::ChatConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for the chat API.
///
/// Returns `None` when no key could be resolved.
pub fn build_auth_header(chat: &ChatConfig) -> Option<AuthHeader> {
    match chat.resolve_credential() {
        CredentialStatus::Configured(key) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        )),
        CredentialStatus::Unconfigured { .. } => None,
    }
}
