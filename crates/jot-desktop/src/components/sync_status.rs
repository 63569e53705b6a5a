//! Sync status indicator for the toolbar.

use dioxus::prelude::*;

use jot_core::models::SyncState;

use crate::state::AppState;

#[component]
pub fn SyncStatusIndicator() -> Element {
    let state = use_context::<AppState>();
    let sync_state = (state.sync_state)();
    let last_sync_at = (state.last_sync_at)();

    let label = sync_state.label();
    let detail = match sync_state {
        SyncState::Synced => last_sync_at
            .map(|timestamp| format!("Last synced {}", relative_time(timestamp)))
            .unwrap_or_else(|| "Up to date".to_string()),
        SyncState::Syncing => "Talking to the backend".to_string(),
        SyncState::Offline => "Sign in to enable cloud sync".to_string(),
        SyncState::Error => "The last sync attempt failed".to_string(),
    };

    rsx! {
        div {
            class: "sync-status",
            "data-sync": sync_attr(sync_state),
            title: "{detail}",

            span { class: "sync-status-dot" }
            span { "{label}" }
        }
    }
}

const fn sync_attr(state: SyncState) -> &'static str {
    match state {
        SyncState::Synced => "synced",
        SyncState::Syncing => "syncing",
        SyncState::Offline => "offline",
        SyncState::Error => "error",
    }
}

/// Coarse relative-time label for "last synced" style UI.
pub fn relative_time(timestamp_ms: i64) -> String {
    let delta_seconds = (chrono::Utc::now().timestamp_millis() - timestamp_ms) / 1000;

    if delta_seconds < 5 {
        "just now".to_string()
    } else if delta_seconds < 60 {
        format!("{delta_seconds}s ago")
    } else if delta_seconds < 60 * 60 {
        format!("{}m ago", delta_seconds / 60)
    } else if delta_seconds < 24 * 60 * 60 {
        format!("{}h ago", delta_seconds / (60 * 60))
    } else {
        format!("{}d ago", delta_seconds / (24 * 60 * 60))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ms_ago(seconds: i64) -> i64 {
        chrono::Utc::now().timestamp_millis() - seconds * 1000
    }

    #[test]
    fn very_recent_sync_reads_as_just_now() {
        assert_eq!(relative_time(ms_ago(0)), "just now");
    }

    #[test]
    fn relative_time_scales_units() {
        assert_eq!(relative_time(ms_ago(42)), "42s ago");
        assert_eq!(relative_time(ms_ago(3 * 60)), "3m ago");
        assert_eq!(relative_time(ms_ago(5 * 60 * 60)), "5h ago");
        assert_eq!(relative_time(ms_ago(2 * 24 * 60 * 60)), "2d ago");
    }

    #[test]
    fn sync_attr_matches_css_hooks() {
        assert_eq!(sync_attr(SyncState::Synced), "synced");
        assert_eq!(sync_attr(SyncState::Offline), "offline");
    }
}
