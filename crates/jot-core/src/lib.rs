//! jot-core - Core library for Jot
//!
//! This crate contains the shared models, the toast notification engine,
//! and the Firebase auth client used by the desktop shell.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;

pub use error::{Error, Result};
pub use models::{Settings, SyncState, ThemeMode};
pub use notify::{NotificationCenter, NotificationId, NotificationKind, ShowOptions};
