//! Settings panel component

use dioxus::prelude::*;

use jot_core::models::{Settings, SyncState, ThemeMode};

use super::ui::{ButtonVariant, UiButton, UiDialog, UiInput};
use crate::services::AuthConfigStatus;
use crate::state::AppState;
use crate::theme::resolve_theme;

/// Font family options
const FONT_FAMILIES: &[(&str, &str)] = &[
    ("system-ui", "System Default"),
    ("JetBrains Mono", "JetBrains Mono"),
    ("Fira Code", "Fira Code"),
    ("Consolas", "Consolas"),
    ("Monaco", "Monaco"),
    ("Menlo", "Menlo"),
];

const AUTH_UNCONFIGURED_HINT: &str =
    "Set FIREBASE_API_KEY and FIREBASE_PROJECT_ID in .env to enable cloud sync.";

/// Settings panel component
#[component]
pub fn SettingsPanel() -> Element {
    let state = use_context::<AppState>();
    let mut settings = state.settings;
    let mut theme = state.theme;
    let mut settings_open = state.settings_open;

    // Save settings: resolve the theme immediately, persist in the background.
    let save_settings = move |new_settings: Settings| {
        theme.set(resolve_theme(new_settings.theme));
        settings.set(new_settings.clone());

        let store = state.settings_store.read().clone();
        let mut notifications = state.notifications;
        spawn(async move {
            let Some(store) = store else {
                return;
            };
            if let Err(error) = store.save(&new_settings) {
                tracing::error!("Failed to save settings: {}", error);
                notifications.error(format!("Failed to save settings: {error}"));
            }
        });
    };

    let current_settings = settings();
    let current_theme_value = match current_settings.theme {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System => "system",
    };

    let auth_service = state.auth_service.read().clone();
    let signed_in_identity = state.signed_in_identity();
    let init_auth_error = (state.auth_error)();
    let mut auth_email = use_signal(String::new);
    let mut auth_password = use_signal(String::new);
    let mut auth_message = use_signal(|| None::<String>);
    let mut auth_busy = use_signal(|| false);
    let mut auth_verifying = use_signal(|| false);
    let auth_config_status = use_signal(|| None::<AuthConfigStatus>);
    let mut auth_config_checked = use_signal(|| false);
    let auth_service_for_preflight = auth_service.clone();

    // Preflight the backend configuration once per panel open.
    use_effect(move || {
        if auth_config_checked() || auth_service_for_preflight.is_none() {
            return;
        }

        auth_config_checked.set(true);
        auth_verifying.set(true);

        let mut auth_error_signal = state.auth_error;
        let mut auth_verifying_signal = auth_verifying;
        let mut auth_config_status_signal = auth_config_status;
        let service = auth_service_for_preflight.clone();

        spawn(async move {
            let Some(service) = service else {
                auth_verifying_signal.set(false);
                return;
            };

            match service.verify_configuration().await {
                Ok(status) => {
                    auth_error_signal.set(None);
                    auth_config_status_signal.set(Some(status));
                }
                Err(error) => {
                    tracing::error!("Auth preflight verify failed: {}", error);
                    auth_error_signal.set(Some(format_auth_error_message(&error.to_string())));
                    auth_config_status_signal.set(None);
                }
            }

            auth_verifying_signal.set(false);
        });
    });

    let sign_in = move |_: MouseEvent| {
        let Some(service) = state.auth_service.read().clone() else {
            auth_message.set(Some(AUTH_UNCONFIGURED_HINT.to_string()));
            return;
        };
        let email = auth_email().trim().to_string();
        let password = auth_password();
        if email.is_empty() || password.trim().is_empty() {
            auth_message.set(Some("Email and password are required.".to_string()));
            return;
        }

        auth_busy.set(true);
        auth_message.set(None);

        let mut auth_session_signal = state.auth_session;
        let mut auth_error_signal = state.auth_error;
        let mut auth_message_signal = auth_message;
        let mut auth_password_signal = auth_password;
        let mut auth_busy_signal = auth_busy;
        let mut sync_state_signal = state.sync_state;
        let mut last_sync_signal = state.last_sync_at;
        let mut notifications = state.notifications;
        spawn(async move {
            match service.sign_in(&email, &password).await {
                Ok(session) => {
                    let identity = session
                        .user
                        .email
                        .clone()
                        .unwrap_or_else(|| session.user.id.clone());
                    auth_session_signal.set(Some(session));
                    auth_error_signal.set(None);
                    auth_password_signal.set(String::new());
                    auth_message_signal.set(None);
                    sync_state_signal.set(SyncState::Synced);
                    last_sync_signal.set(Some(chrono::Utc::now().timestamp_millis()));
                    notifications.success(format!("Signed in as {identity}"));
                }
                Err(error) => {
                    tracing::error!("Sign-in failed: {}", error);
                    let message = format_auth_error_message(&error.to_string());
                    auth_error_signal.set(Some(message.clone()));
                    auth_message_signal.set(Some(message.clone()));
                    notifications.error(message);
                }
            }
            auth_busy_signal.set(false);
        });
    };

    let sign_up = move |_: MouseEvent| {
        let Some(service) = state.auth_service.read().clone() else {
            auth_message.set(Some(AUTH_UNCONFIGURED_HINT.to_string()));
            return;
        };

        if auth_verifying() {
            auth_message.set(Some(
                "Auth configuration check is still running.".to_string(),
            ));
            return;
        }

        let email = auth_email().trim().to_string();
        let password = auth_password();
        if email.is_empty() || password.trim().is_empty() {
            auth_message.set(Some("Email and password are required.".to_string()));
            return;
        }

        auth_busy.set(true);
        auth_message.set(None);

        let mut auth_session_signal = state.auth_session;
        let mut auth_error_signal = state.auth_error;
        let mut auth_message_signal = auth_message;
        let mut auth_password_signal = auth_password;
        let mut auth_busy_signal = auth_busy;
        let mut sync_state_signal = state.sync_state;
        let mut last_sync_signal = state.last_sync_at;
        let mut notifications = state.notifications;
        spawn(async move {
            match service.sign_up(&email, &password).await {
                Ok(session) => {
                    let identity = session
                        .user
                        .email
                        .clone()
                        .unwrap_or_else(|| session.user.id.clone());
                    auth_session_signal.set(Some(session));
                    auth_error_signal.set(None);
                    auth_password_signal.set(String::new());
                    auth_message_signal.set(None);
                    sync_state_signal.set(SyncState::Synced);
                    last_sync_signal.set(Some(chrono::Utc::now().timestamp_millis()));
                    notifications.success(format!("Account created, signed in as {identity}"));
                }
                Err(error) => {
                    tracing::error!("Sign-up failed: {}", error);
                    let message = format_auth_error_message(&error.to_string());
                    auth_error_signal.set(Some(message.clone()));
                    auth_message_signal.set(Some(message.clone()));
                    notifications.error(message);
                }
            }
            auth_busy_signal.set(false);
        });
    };

    let sign_out = move |_: MouseEvent| {
        let Some(service) = state.auth_service.read().clone() else {
            auth_message.set(Some(AUTH_UNCONFIGURED_HINT.to_string()));
            return;
        };

        let mut auth_session_signal = state.auth_session;
        let mut auth_error_signal = state.auth_error;
        let mut auth_message_signal = auth_message;
        let mut sync_state_signal = state.sync_state;
        let mut notifications = state.notifications;
        match service.sign_out() {
            Ok(()) => {
                auth_session_signal.set(None);
                auth_error_signal.set(None);
                auth_message_signal.set(None);
                sync_state_signal.set(SyncState::Offline);
                // Session-scoped toasts are stale once the account changes.
                notifications.dismiss_all();
                notifications.info("Signed out");
            }
            Err(error) => {
                tracing::error!("Sign-out failed: {}", error);
                let message = format_auth_error_message(&error.to_string());
                auth_error_signal.set(Some(message.clone()));
                auth_message_signal.set(Some(message));
            }
        }
    };

    let verify_config = move |_: MouseEvent| {
        let Some(service) = state.auth_service.read().clone() else {
            auth_message.set(Some(AUTH_UNCONFIGURED_HINT.to_string()));
            return;
        };

        auth_verifying.set(true);
        auth_message.set(None);

        let mut auth_error_signal = state.auth_error;
        let mut auth_message_signal = auth_message;
        let mut auth_verifying_signal = auth_verifying;
        let mut auth_config_status_signal = auth_config_status;
        spawn(async move {
            let expected_project = service.project_id().to_string();
            match service.verify_configuration().await {
                Ok(status) => {
                    auth_error_signal.set(None);
                    auth_message_signal.set(Some(format_auth_config_status(
                        &status,
                        &expected_project,
                    )));
                    auth_config_status_signal.set(Some(status));
                }
                Err(error) => {
                    tracing::error!("Auth config verify failed: {}", error);
                    let message = format_auth_error_message(&error.to_string());
                    auth_error_signal.set(Some(message.clone()));
                    auth_message_signal.set(Some(message));
                    auth_config_status_signal.set(None);
                }
            }
            auth_verifying_signal.set(false);
        });
    };

    let auth_working = auth_busy() || auth_verifying();

    rsx! {
        UiDialog {
            title: "Settings",
            on_close: move |()| settings_open.set(false),

            // Theme setting
            SettingRow {
                label: "Theme",
                description: "Choose your preferred color scheme",

                select {
                    class: "ui-select",
                    onchange: {
                        let mut save = save_settings;
                        move |event: FormEvent| {
                            let new_theme = match event.value().as_str() {
                                "light" => ThemeMode::Light,
                                "dark" => ThemeMode::Dark,
                                _ => ThemeMode::System,
                            };
                            let mut new_settings = settings();
                            new_settings.theme = new_theme;
                            save(new_settings);
                        }
                    },

                    option {
                        value: "system",
                        selected: current_theme_value == "system",
                        "System"
                    }
                    option {
                        value: "light",
                        selected: current_theme_value == "light",
                        "Light"
                    }
                    option {
                        value: "dark",
                        selected: current_theme_value == "dark",
                        "Dark"
                    }
                }
            }

            // Font family setting
            SettingRow {
                label: "Font Family",
                description: "Font used for note content",

                select {
                    class: "ui-select",
                    onchange: {
                        let mut save = save_settings;
                        move |event: FormEvent| {
                            let mut new_settings = settings();
                            new_settings.font_family = event.value();
                            save(new_settings);
                        }
                    },

                    for (value, label) in FONT_FAMILIES.iter().copied() {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: current_settings.font_family == value,
                            "{label}"
                        }
                    }
                }
            }

            // Font size setting
            SettingRow {
                label: "Font Size",
                description: "Size of text in notes (10-24px)",

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "range",
                        min: "10",
                        max: "24",
                        step: "1",
                        value: "{current_settings.font_size}",
                        oninput: {
                            let mut save = save_settings;
                            move |event: FormEvent| {
                                if let Ok(size) = event.value().parse::<u32>() {
                                    let mut new_settings = settings();
                                    new_settings.font_size = size.clamp(10, 24);
                                    save(new_settings);
                                }
                            }
                        },
                        style: "width: 100px;",
                    }
                    span {
                        class: "slider-value",
                        "{current_settings.font_size}px"
                    }
                }
            }

            // Account authentication
            SettingRow {
                label: "Account",
                description: "Sign in with Firebase for cloud sync",

                div {
                    class: "auth-panel",

                    if let Some(identity) = &signed_in_identity {
                        div {
                            class: "auth-status",
                            "Signed in as {identity}"
                        }
                        UiButton {
                            variant: ButtonVariant::Secondary,
                            disabled: auth_working,
                            onclick: sign_out,
                            "Sign Out"
                        }
                    } else if auth_service.is_some() {
                        UiInput {
                            r#type: "email",
                            placeholder: "Email",
                            value: "{auth_email}",
                            disabled: auth_working,
                            oninput: move |event: FormEvent| {
                                auth_email.set(event.value());
                            },
                        }
                        UiInput {
                            r#type: "password",
                            placeholder: "Password",
                            value: "{auth_password}",
                            disabled: auth_working,
                            oninput: move |event: FormEvent| {
                                auth_password.set(event.value());
                            },
                        }
                        div {
                            class: "auth-actions",
                            UiButton {
                                variant: ButtonVariant::Primary,
                                disabled: auth_working,
                                onclick: sign_in,
                                "Sign In"
                            }
                            UiButton {
                                variant: ButtonVariant::Secondary,
                                disabled: auth_working,
                                onclick: sign_up,
                                "Sign Up"
                            }
                        }
                    } else {
                        div {
                            class: "auth-hint",
                            "{AUTH_UNCONFIGURED_HINT}"
                        }
                    }

                    if auth_service.is_some() {
                        UiButton {
                            variant: ButtonVariant::Ghost,
                            disabled: auth_working,
                            onclick: verify_config,
                            "Verify Config"
                        }
                    }

                    if auth_working {
                        div {
                            class: "auth-message",
                            "Working..."
                        }
                    }

                    if let Some(message) = auth_message() {
                        div {
                            class: "auth-message",
                            "{message}"
                        }
                    }

                    if let Some(error_message) = init_auth_error {
                        div {
                            class: "auth-error",
                            "{error_message}"
                        }
                    }
                }
            }
        }
    }
}

/// Individual setting row
#[component]
fn SettingRow(label: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "settings-row",

            div {
                class: "settings-row-info",
                div {
                    class: "settings-row-label",
                    "{label}"
                }
                div {
                    class: "settings-row-description",
                    "{description}"
                }
            }
            div {
                class: "settings-row-control",
                {children}
            }
        }
    }
}

fn format_auth_error_message(raw: &str) -> String {
    let normalized = raw.to_uppercase();
    if normalized.contains("EMAIL_EXISTS") {
        return "An account already exists for this email. Sign in instead.".to_string();
    }
    if normalized.contains("EMAIL_NOT_FOUND")
        || normalized.contains("INVALID_PASSWORD")
        || normalized.contains("INVALID_LOGIN_CREDENTIALS")
    {
        return "Email or password is incorrect.".to_string();
    }
    if normalized.contains("TOO_MANY_ATTEMPTS") {
        return "Too many attempts. Wait a few minutes and try again.".to_string();
    }
    if normalized.contains("WEAK_PASSWORD") {
        return "Password is too weak. Use at least 6 characters.".to_string();
    }
    if normalized.contains("INVALID_EMAIL") {
        return "Email address is not valid.".to_string();
    }
    if normalized.contains("API_KEY_NOT_VALID") || normalized.contains("API KEY NOT VALID") {
        return "The Firebase API key was rejected. Check FIREBASE_API_KEY.".to_string();
    }
    if normalized.contains("HTTP REQUEST FAILED")
        || normalized.contains("CONNECTION")
        || normalized.contains("TIMED OUT")
    {
        return "Network error while contacting Firebase Auth. Check your internet connection."
            .to_string();
    }

    raw.to_string()
}

fn format_auth_config_status(status: &AuthConfigStatus, expected_project: &str) -> String {
    if !status.matches_project(expected_project) {
        let reported = status.project_id.as_deref().unwrap_or("unknown");
        return format!(
            "Auth config check: API key belongs to project {reported}, expected {expected_project}."
        );
    }

    format!(
        "Auth config check passed. {} authorized domain(s).",
        status.authorized_domains.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_message_maps_bad_credentials() {
        let message =
            format_auth_error_message("Auth API error: INVALID_LOGIN_CREDENTIALS (400 Bad Request)");
        assert_eq!(message, "Email or password is incorrect.");
    }

    #[test]
    fn auth_error_message_maps_existing_email() {
        let message = format_auth_error_message("Auth API error: EMAIL_EXISTS (400 Bad Request)");
        assert!(message.contains("already exists"));
    }

    #[test]
    fn auth_error_message_maps_network_failures() {
        let message = format_auth_error_message("HTTP request failed: connection refused");
        assert!(message.contains("Network error"));
    }

    #[test]
    fn auth_error_message_passes_unknown_errors_through() {
        let message = format_auth_error_message("Auth API error: SOMETHING_ODD");
        assert_eq!(message, "Auth API error: SOMETHING_ODD");
    }

    #[test]
    fn config_status_reports_project_mismatch() {
        let status = AuthConfigStatus {
            project_id: Some("other-project".to_string()),
            authorized_domains: Vec::new(),
        };
        let message = format_auth_config_status(&status, "jot-dev");
        assert!(message.contains("other-project"));
        assert!(message.contains("jot-dev"));
    }

    #[test]
    fn config_status_reports_domain_count_on_match() {
        let status = AuthConfigStatus {
            project_id: Some("jot-dev".to_string()),
            authorized_domains: vec!["localhost".to_string(), "jot.example".to_string()],
        };
        let message = format_auth_config_status(&status, "jot-dev");
        assert!(message.contains("passed"));
        assert!(message.contains("2 authorized domain(s)"));
    }
}
