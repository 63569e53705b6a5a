//! Desktop bootstrap configuration loaded from build-time generated JSON.

use serde::{Deserialize, Serialize};

use jot_core::config::normalize_text_option;

/// Build-provisioned Firebase client configuration embedded into the
/// desktop binary.
///
/// These are the safe-to-ship public identifiers a Firebase web client
/// would load from its environment; secret credentials must never be
/// stored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub firebase_api_key: Option<String>,
    #[serde(default)]
    pub firebase_auth_domain: Option<String>,
    #[serde(default)]
    pub firebase_project_id: Option<String>,
    #[serde(default)]
    pub firebase_app_id: Option<String>,
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty
/// config so the app keeps running without cloud features.
pub fn load_bootstrap_config() -> BootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse bootstrap config: {}", error);
        BootstrapConfig::default()
    })
}

impl BootstrapConfig {
    /// Returns the auth domain for hosted flows.
    ///
    /// Prefers the explicit `firebase_auth_domain`; otherwise derives the
    /// conventional `<project>.firebaseapp.com` domain from the project id.
    pub fn auth_domain(&self) -> Option<String> {
        if let Some(domain) = normalize_text_option(self.firebase_auth_domain.clone()) {
            return Some(domain);
        }

        normalize_text_option(self.firebase_project_id.clone())
            .map(|project| format!("{project}.firebaseapp.com"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_domain_prefers_explicit_value() {
        let config = BootstrapConfig {
            firebase_auth_domain: Some("auth.jot.example".to_string()),
            firebase_project_id: Some("jot-dev".to_string()),
            ..Default::default()
        };
        assert_eq!(config.auth_domain().as_deref(), Some("auth.jot.example"));
    }

    #[test]
    fn auth_domain_derives_from_project_id() {
        let config = BootstrapConfig {
            firebase_project_id: Some("jot-dev".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.auth_domain().as_deref(),
            Some("jot-dev.firebaseapp.com")
        );
    }

    #[test]
    fn auth_domain_absent_when_unconfigured() {
        assert_eq!(BootstrapConfig::default().auth_domain(), None);
    }
}
