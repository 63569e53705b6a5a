//! Shared Firebase auth client logic.
//!
//! Thin client for the Identity Toolkit REST API (email/password flows)
//! plus the secure-token refresh endpoint. Session persistence is
//! injected so each shell can pick its own secure storage.

use std::fmt;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::normalize_text_option;

const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com/v1";

const EXPIRY_SKEW_SECONDS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= unix_timestamp_now() + EXPIRY_SKEW_SECONDS
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("id_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Project-level auth configuration reported by the Identity Toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfigStatus {
    pub project_id: Option<String>,
    pub authorized_domains: Vec<String>,
}

impl AuthConfigStatus {
    /// Whether the backend project matches the one this build was
    /// provisioned for.
    #[must_use]
    pub fn matches_project(&self, expected: &str) -> bool {
        self.project_id
            .as_deref()
            .is_some_and(|reported| reported == expected)
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Firebase auth is not configured for this build.")]
    NotConfigured,
    #[error("Invalid auth configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Auth API error: {0}")]
    Api(String),
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> AuthResult<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> AuthResult<()>;
    fn clear_session(&self) -> AuthResult<()>;
}

#[derive(Clone)]
pub struct FirebaseAuthClient<S: SessionPersistence> {
    api_key: String,
    project_id: String,
    client: Client,
    store: S,
}

impl<S: SessionPersistence> FirebaseAuthClient<S> {
    pub fn new(
        api_key: impl Into<String>,
        project_id: impl Into<String>,
        store: S,
    ) -> AuthResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Firebase API key must not be empty",
            ));
        }
        let project_id = project_id.into().trim().to_string();
        if project_id.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Firebase project id must not be empty",
            ));
        }

        Ok(Self {
            api_key,
            project_id,
            client: Client::builder().build()?,
            store,
        })
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Loads the persisted session, refreshing it when expired. A session
    /// that can no longer be refreshed is cleared rather than surfaced as
    /// an error.
    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        let Some(stored_session) = self.store.load_session()? else {
            return Ok(None);
        };

        if !stored_session.is_expired() {
            return Ok(Some(stored_session));
        }

        match self.refresh_session(&stored_session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(error) => {
                tracing::warn!("Failed to refresh persisted session: {}", error);
                self.store.clear_session()?;
                Ok(None)
            }
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let request = self.keyed_request(
            self.client
                .post(format!("{IDENTITY_BASE_URL}/accounts:signUp"))
                .json(&payload),
        );

        let response = self.send_auth_request(request).await?;
        let session = response.into_session()?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let request = self.keyed_request(
            self.client
                .post(format!("{IDENTITY_BASE_URL}/accounts:signInWithPassword"))
                .json(&payload),
        );

        let response = self.send_auth_request(request).await?;
        let session = response.into_session()?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> AuthResult<AuthSession> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Refresh token must not be empty",
            ));
        }

        let request = self.keyed_request(
            self.client
                .post(format!("{SECURE_TOKEN_BASE_URL}/token"))
                .form(&[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                ]),
        );

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }

        let payload = response.json::<SecureTokenResponse>().await?;
        let session = payload.into_session()?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    /// Drops the persisted session. The Identity Toolkit has no
    /// revocation endpoint for password sessions; the refresh token
    /// simply stops being used.
    pub fn sign_out(&self) -> AuthResult<()> {
        self.store.clear_session()
    }

    /// Fetches the public project configuration, which confirms the API
    /// key is valid and reports the authorized domains.
    pub async fn verify_configuration(&self) -> AuthResult<AuthConfigStatus> {
        let request = self.keyed_request(
            self.client
                .get(format!("{IDENTITY_BASE_URL}/projects"))
                .header("Accept", "application/json"),
        );

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }

        let payload = response.json::<ProjectConfigResponse>().await?;
        Ok(AuthConfigStatus {
            project_id: payload.project_id,
            authorized_domains: payload.authorized_domains,
        })
    }

    fn keyed_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.query(&[("key", &self.api_key)])
    }

    async fn send_auth_request(&self, request: RequestBuilder) -> AuthResult<IdentityResponse> {
        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }
        Ok(response.json::<IdentityResponse>().await?)
    }
}

/// Resolves the optional Firebase configuration pair. Wholly absent
/// config means the feature is off; a partial pair is a
/// misconfiguration, not an off switch.
pub fn resolve_optional_firebase_config(
    api_key: Option<String>,
    project_id: Option<String>,
) -> AuthResult<Option<(String, String)>> {
    let api_key = normalize_text_option(api_key);
    let project_id = normalize_text_option(project_id);

    match (api_key, project_id) {
        (None, None) => Ok(None),
        (Some(api_key), Some(project_id)) => Ok(Some((api_key, project_id))),
        _ => Err(AuthError::NotConfigured),
    }
}

fn validate_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.trim().is_empty() {
        return Err(AuthError::Api("Email is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(AuthError::Api("Password is required".to_string()));
    }
    Ok(())
}

fn unix_timestamp_now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityResponse {
    id_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<String>,
    local_id: Option<String>,
    email: Option<String>,
}

impl IdentityResponse {
    fn into_session(self) -> AuthResult<AuthSession> {
        let (Some(id_token), Some(refresh_token), Some(local_id)) =
            (self.id_token, self.refresh_token, self.local_id)
        else {
            return Err(AuthError::Api(
                "Auth response did not include enough session fields".to_string(),
            ));
        };

        Ok(AuthSession {
            id_token,
            refresh_token,
            expires_at: expiry_from_lifetime(self.expires_in.as_deref())?,
            user: AuthUser {
                id: local_id,
                email: self.email,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct SecureTokenResponse {
    id_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<String>,
    user_id: Option<String>,
}

impl SecureTokenResponse {
    fn into_session(self) -> AuthResult<AuthSession> {
        let (Some(id_token), Some(refresh_token), Some(user_id)) =
            (self.id_token, self.refresh_token, self.user_id)
        else {
            return Err(AuthError::Api(
                "Refresh response did not include enough session fields".to_string(),
            ));
        };

        Ok(AuthSession {
            id_token,
            refresh_token,
            expires_at: expiry_from_lifetime(self.expires_in.as_deref())?,
            user: AuthUser {
                id: user_id,
                email: None,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectConfigResponse {
    project_id: Option<String>,
    #[serde(default)]
    authorized_domains: Vec<String>,
}

/// The Identity Toolkit reports token lifetimes as decimal-second
/// strings (e.g. `"3600"`).
fn expiry_from_lifetime(expires_in: Option<&str>) -> AuthResult<i64> {
    let raw = expires_in.ok_or_else(|| {
        AuthError::Api("Auth response did not include a token lifetime".to_string())
    })?;
    let seconds: i64 = raw.trim().parse().map_err(|_| {
        AuthError::Api(format!("Auth response reported a malformed token lifetime: {raw}"))
    })?;
    Ok(unix_timestamp_now().saturating_add(seconds))
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: Option<ErrorBody>,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .map_or_else(
            || format!("HTTP {status}"),
            |message| format!("{message} ({status})"),
        )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolve_config_absent_pair_disables_auth() {
        assert!(resolve_optional_firebase_config(None, None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn resolve_config_partial_pair_is_an_error() {
        let result = resolve_optional_firebase_config(Some("key".to_string()), None);
        assert!(matches!(result, Err(AuthError::NotConfigured)));
    }

    #[test]
    fn resolve_config_trims_values() {
        let resolved = resolve_optional_firebase_config(
            Some(" AIza-demo ".to_string()),
            Some(" jot-dev ".to_string()),
        )
        .unwrap()
        .unwrap();
        assert_eq!(resolved, ("AIza-demo".to_string(), "jot-dev".to_string()));
    }

    #[test]
    fn credentials_must_be_non_empty() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("user@example.com", "  ").is_err());
        assert!(validate_credentials("user@example.com", "secret").is_ok());
    }

    #[test]
    fn identity_response_maps_to_session() {
        let response: IdentityResponse = serde_json::from_str(
            r#"{
                "idToken": "token",
                "refreshToken": "refresh",
                "expiresIn": "3600",
                "localId": "uid-1",
                "email": "user@example.com"
            }"#,
        )
        .unwrap();

        let session = response.into_session().unwrap();
        assert_eq!(session.user.id, "uid-1");
        assert_eq!(session.user.email.as_deref(), Some("user@example.com"));
        assert!(session.expires_at > unix_timestamp_now() + 3000);
        assert!(!session.is_expired());
    }

    #[test]
    fn identity_response_without_tokens_is_an_api_error() {
        let response: IdentityResponse =
            serde_json::from_str(r#"{"localId": "uid-1"}"#).unwrap();
        assert!(matches!(
            response.into_session(),
            Err(AuthError::Api(_))
        ));
    }

    #[test]
    fn malformed_lifetime_is_an_api_error() {
        assert!(matches!(
            expiry_from_lifetime(Some("soon")),
            Err(AuthError::Api(_))
        ));
    }

    #[test]
    fn session_near_expiry_counts_as_expired() {
        let session = AuthSession {
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: unix_timestamp_now() + 10,
            user: AuthUser {
                id: "uid".to_string(),
                email: None,
            },
        };
        assert!(session.is_expired());
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let session = AuthSession {
            id_token: "top-secret".to_string(),
            refresh_token: "also-secret".to_string(),
            expires_at: 0,
            user: AuthUser {
                id: "uid".to_string(),
                email: None,
            },
        };
        let rendered = format!("{session:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("top-secret"));
    }

    #[test]
    fn api_error_prefers_identity_toolkit_message() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS"}}"#;
        let message = parse_api_error(StatusCode::BAD_REQUEST, body);
        assert!(message.contains("EMAIL_EXISTS"));
    }

    #[test]
    fn api_error_falls_back_to_status() {
        let message = parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "not json");
        assert_eq!(message, "HTTP 500 Internal Server Error");
    }

    #[test]
    fn config_status_matches_expected_project() {
        let status = AuthConfigStatus {
            project_id: Some("jot-dev".to_string()),
            authorized_domains: vec!["localhost".to_string()],
        };
        assert!(status.matches_project("jot-dev"));
        assert!(!status.matches_project("jot-prod"));
    }
}
