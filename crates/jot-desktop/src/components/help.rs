//! Keyboard-shortcut help modal.

use dioxus::prelude::*;

use super::ui::UiDialog;
use crate::state::AppState;

/// Shortcuts the app shell actually handles. Must stay in sync with the
/// key handler in `app.rs`.
const SHORTCUTS: &[(&str, &str)] = &[
    ("?", "Show this help"),
    ("Esc", "Close dialogs, then clear notifications"),
    ("Ctrl+,", "Open settings"),
    ("Ctrl+Shift+L", "Cycle theme (light, dark, system)"),
];

#[component]
pub fn ShortcutHelpModal() -> Element {
    let state = use_context::<AppState>();
    let mut help_open = state.help_open;

    rsx! {
        UiDialog {
            title: "Keyboard Shortcuts",
            on_close: move |()| help_open.set(false),

            table {
                class: "shortcut-table",
                tbody {
                    for (keys, description) in SHORTCUTS.iter().copied() {
                        tr {
                            key: "{keys}",
                            td {
                                class: "shortcut-keys",
                                kbd { "{keys}" }
                            }
                            td {
                                class: "shortcut-description",
                                "{description}"
                            }
                        }
                    }
                }
            }
        }
    }
}
