//! Top toolbar: app title, sync status, help and settings entry points.

use dioxus::prelude::*;

use super::sync_status::SyncStatusIndicator;
use super::ui::{ButtonVariant, UiButton};
use crate::state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();
    let mut settings_open = state.settings_open;
    let mut help_open = state.help_open;

    rsx! {
        header {
            class: "toolbar",

            h1 { class: "toolbar-title", "Jot" }

            div {
                class: "toolbar-actions",

                SyncStatusIndicator {}

                UiButton {
                    variant: ButtonVariant::Ghost,
                    title: "Keyboard shortcuts (?)",
                    onclick: move |_| help_open.set(true),
                    "?"
                }
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| settings_open.set(true),
                    "Settings"
                }
            }
        }
    }
}
