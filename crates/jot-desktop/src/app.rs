//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::models::{Settings, SyncState, ThemeMode};
use jot_core::notify::NotificationCenter;

use crate::bootstrap_config::load_bootstrap_config;
use crate::components::{
    NotificationHost, Notifications, SettingsPanel, ShortcutHelpModal, NOTIFICATION_STYLES,
    SHELL_STYLES,
};
use crate::services::{FirebaseAuthService, SettingsStore};
use crate::state::AppState;
use crate::theme::{next_theme_mode, resolve_theme, theme_mode_label};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut settings = use_signal(Settings::default);
    let mut theme = use_signal(|| resolve_theme(ThemeMode::System));
    let settings_open = use_signal(|| false);
    let help_open = use_signal(|| false);
    let mut settings_store: Signal<Option<Arc<SettingsStore>>> = use_signal(|| None);
    let mut auth_service: Signal<Option<Arc<FirebaseAuthService>>> = use_signal(|| None);
    let mut auth_session = use_signal(|| None);
    let mut auth_error = use_signal(|| None);
    let mut sync_state = use_signal(|| SyncState::Offline);
    let mut last_sync_at = use_signal(|| None);
    let center = use_signal(NotificationCenter::new);
    let notifications = Notifications::new(center);
    let mut initialized = use_signal(|| false);

    // One-shot startup: settings come up synchronously so the first paint
    // is themed; the session restore runs in the background.
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init

        match SettingsStore::new() {
            Ok(store) => {
                let loaded_settings = store.load();
                theme.set(resolve_theme(loaded_settings.theme));
                settings.set(loaded_settings);
                settings_store.set(Some(Arc::new(store)));
            }
            Err(error) => {
                tracing::warn!("Settings persistence unavailable: {}", error);
            }
        }

        let bootstrap_config = load_bootstrap_config();
        match FirebaseAuthService::new_from_bootstrap(&bootstrap_config) {
            Ok(Some(service)) => {
                tracing::debug!(
                    "Firebase auth configured (auth domain: {})",
                    bootstrap_config.auth_domain().unwrap_or_default()
                );
                let service = Arc::new(service);
                auth_service.set(Some(service.clone()));

                let mut notifications = notifications;
                spawn(async move {
                    match service.restore_session().await {
                        Ok(Some(session)) => {
                            let identity = session
                                .user
                                .email
                                .clone()
                                .unwrap_or_else(|| session.user.id.clone());
                            auth_session.set(Some(session));
                            sync_state.set(SyncState::Synced);
                            last_sync_at.set(Some(chrono::Utc::now().timestamp_millis()));
                            tracing::info!("Restored cloud session for {}", identity);
                        }
                        Ok(None) => {
                            tracing::debug!("No persisted cloud session");
                        }
                        Err(error) => {
                            tracing::warn!("Failed to restore auth session: {}", error);
                            auth_error.set(Some(error.to_string()));
                            notifications.warning(
                                "Could not restore your cloud session. Sign in again to sync.",
                            );
                        }
                    }
                });
            }
            Ok(None) => {
                tracing::info!("Firebase auth not configured; running local-only");
            }
            Err(error) => {
                tracing::error!("Firebase auth is misconfigured: {}", error);
                auth_error.set(Some(error.to_string()));
            }
        }
    });

    use_context_provider(|| AppState {
        settings,
        theme,
        settings_store,
        auth_service,
        auth_session,
        auth_error,
        sync_state,
        last_sync_at,
        settings_open,
        help_open,
        notifications,
    });

    // Quick theme cycle used by the keyboard shortcut.
    let mut cycle_theme = move || {
        let mut new_settings = settings();
        let next_mode = next_theme_mode(new_settings.theme);
        new_settings.theme = next_mode;
        theme.set(resolve_theme(next_mode));
        settings.set(new_settings.clone());

        let store = settings_store.read().clone();
        let mut notifications = notifications;
        spawn(async move {
            let Some(store) = store else {
                return;
            };
            if let Err(error) = store.save(&new_settings) {
                tracing::error!("Failed to save settings: {}", error);
                notifications.error(format!("Failed to save settings: {error}"));
            }
        });

        let mut notifications = notifications;
        notifications.info(format!("Theme: {}", theme_mode_label(next_mode)));
    };

    // Single shell-wide key handler. Modals own their close buttons; this
    // is the only place Escape and the shortcut keys are interpreted.
    let mut help_open_for_keys = help_open;
    let mut settings_open_for_keys = settings_open;
    let mut notifications_for_keys = notifications;
    let on_keydown = move |event: Event<KeyboardData>| {
        match event.key() {
            Key::Character(text) => {
                let modifiers = event.modifiers();
                if text == "?" && !modifiers.ctrl() && !modifiers.meta() {
                    help_open_for_keys.set(!help_open_for_keys());
                } else if text == "," && (modifiers.ctrl() || modifiers.meta()) {
                    settings_open_for_keys.set(!settings_open_for_keys());
                } else if text.eq_ignore_ascii_case("l")
                    && (modifiers.ctrl() || modifiers.meta())
                    && modifiers.shift()
                {
                    cycle_theme();
                }
            }
            Key::Escape => {
                // Help wins over settings; with nothing open, clear toasts.
                if help_open_for_keys() {
                    help_open_for_keys.set(false);
                } else if settings_open_for_keys() {
                    settings_open_for_keys.set(false);
                } else if notifications_for_keys.has_active() {
                    notifications_for_keys.dismiss_all();
                }
            }
            _ => {}
        }
    };

    let current_theme = theme();
    let colors = current_theme.palette();
    let current_settings = settings();

    rsx! {
        style { "{SHELL_STYLES}{NOTIFICATION_STYLES}" }

        div {
            class: "app-container",
            "data-theme": current_theme.attr(),
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            style: "
                min-height: 100vh;
                outline: none;
                font-family: {current_settings.font_family}, system-ui, -apple-system, sans-serif;
                font-size: {current_settings.font_size}px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            Home {}

            // Modal overlays
            if settings_open() {
                SettingsPanel {}
            }
            if help_open() {
                ShortcutHelpModal {}
            }

            // Toast stack, above everything
            NotificationHost {}
        }
    }
}
