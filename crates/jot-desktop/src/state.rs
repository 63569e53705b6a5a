//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::models::{Settings, SyncState};

use crate::components::Notifications;
use crate::services::{AuthSession, FirebaseAuthService, SettingsStore};
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Application settings
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Settings persistence, if the config directory is available
    pub settings_store: Signal<Option<Arc<SettingsStore>>>,
    /// Auth service if cloud auth is configured
    pub auth_service: Signal<Option<Arc<FirebaseAuthService>>>,
    /// Active auth session, if signed in
    pub auth_session: Signal<Option<AuthSession>>,
    /// Last auth initialization/sign-in error for UI display
    pub auth_error: Signal<Option<String>>,
    /// Current cloud sync status
    pub sync_state: Signal<SyncState>,
    /// Timestamp (unix ms) of the most recent successful sync
    pub last_sync_at: Signal<Option<i64>>,
    /// Whether the settings panel is open
    pub settings_open: Signal<bool>,
    /// Whether the shortcut help modal is open
    pub help_open: Signal<bool>,
    /// Toast notification handle shared by every consumer
    pub notifications: Notifications,
}

impl AppState {
    /// Identity shown in account UI, preferring the email when known.
    #[must_use]
    pub fn signed_in_identity(&self) -> Option<String> {
        (self.auth_session)().map(|session| {
            session
                .user
                .email
                .clone()
                .unwrap_or_else(|| format!("user {}", session.user.id))
        })
    }
}
