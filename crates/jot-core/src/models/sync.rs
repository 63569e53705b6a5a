//! Cloud sync status model

use serde::{Deserialize, Serialize};

/// Current cloud sync status for the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    /// All local changes are on the backend
    Synced,
    /// A sync pass is in flight
    Syncing,
    /// No backend configured or not signed in
    #[default]
    Offline,
    /// The last sync attempt failed
    Error,
}

impl SyncState {
    /// Short human-readable label for status UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Synced => "Synced",
            Self::Syncing => "Syncing...",
            Self::Offline => "Offline",
            Self::Error => "Sync error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_offline() {
        assert_eq!(SyncState::default(), SyncState::Offline);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(SyncState::Synced.label(), "Synced");
        assert_eq!(SyncState::Error.label(), "Sync error");
    }
}
