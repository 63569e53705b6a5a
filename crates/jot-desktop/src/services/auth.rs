//! Firebase authentication service with secure session storage.

use keyring::Entry;

use crate::bootstrap_config::BootstrapConfig;

use jot_core::auth::{
    resolve_optional_firebase_config, AuthResult, FirebaseAuthClient, SessionPersistence,
};
pub use jot_core::auth::{AuthConfigStatus, AuthError, AuthSession};

const KEYRING_SERVICE_NAME: &str = "jot";
const KEYRING_SESSION_USERNAME: &str = "firebase_session";

#[derive(Debug, Clone)]
struct SessionStore {
    service_name: String,
    username: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl SessionStore {
    fn entry(&self) -> AuthResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for SessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> AuthResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct FirebaseAuthService {
    inner: FirebaseAuthClient<SessionStore>,
}

impl FirebaseAuthService {
    pub fn new_from_bootstrap(config: &BootstrapConfig) -> AuthResult<Option<Self>> {
        let Some((api_key, project_id)) = resolve_optional_firebase_config(
            config.firebase_api_key.clone(),
            config.firebase_project_id.clone(),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(api_key, project_id)?))
    }

    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            inner: FirebaseAuthClient::new(api_key, project_id, SessionStore::default())?,
        })
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        self.inner.project_id()
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        self.inner.restore_session().await
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_up(email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_in(email, password).await
    }

    pub fn sign_out(&self) -> AuthResult<()> {
        self.inner.sign_out()
    }

    pub async fn verify_configuration(&self) -> AuthResult<AuthConfigStatus> {
        self.inner.verify_configuration().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_from_bootstrap_returns_none_when_values_missing() {
        let config = BootstrapConfig::default();
        assert!(FirebaseAuthService::new_from_bootstrap(&config)
            .unwrap()
            .is_none());
    }

    #[test]
    fn new_from_bootstrap_rejects_partial_config() {
        let config = BootstrapConfig {
            firebase_api_key: Some("AIza-demo".to_string()),
            ..Default::default()
        };
        assert!(FirebaseAuthService::new_from_bootstrap(&config).is_err());
    }
}
