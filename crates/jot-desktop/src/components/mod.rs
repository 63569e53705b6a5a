//! UI Components
//!
//! Reusable UI components for the desktop shell.

mod help;
mod notifications;
mod settings;
mod sync_status;
mod toolbar;
mod ui;

pub use help::ShortcutHelpModal;
pub use notifications::{NotificationHost, Notifications, NOTIFICATION_STYLES};
pub use settings::SettingsPanel;
pub use toolbar::Toolbar;
pub use ui::SHELL_STYLES;
