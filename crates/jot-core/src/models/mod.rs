//! Data models shared across Jot interfaces.

mod settings;
mod sync;

pub use settings::{Settings, ThemeMode};
pub use sync::SyncState;
