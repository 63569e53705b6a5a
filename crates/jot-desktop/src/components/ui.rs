//! Shared UI primitives for the desktop shell.

use dioxus::prelude::*;

/// Shared styles for buttons, inputs, dialogs, and chrome.
pub const SHELL_STYLES: &str = r"
.ui-button {
    border-radius: 8px;
    padding: 7px 12px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
    cursor: default;
}

.ui-button--primary {
    background: #0969da;
    color: #ffffff;
    border-color: #0969da;
}

.ui-button--secondary {
    background: #1f2328;
    color: #ffffff;
    border-color: #1f2328;
}

.ui-button--outline {
    background: transparent;
    color: #1f2328;
    border-color: #d0d7de;
}

.ui-button--ghost {
    background: transparent;
    color: #57606a;
    border-color: transparent;
}

.ui-button--danger {
    background: #cf222e;
    color: #ffffff;
    border-color: #cf222e;
}

.ui-input {
    width: 100%;
    border: 1px solid #d0d7de;
    border-radius: 8px;
    padding: 8px 10px;
    font-size: 13px;
    background: #ffffff;
    color: #1f2328;
    box-sizing: border-box;
}

.ui-select {
    border: 1px solid #d0d7de;
    border-radius: 8px;
    padding: 7px 10px;
    font-size: 13px;
    background: #ffffff;
    color: #1f2328;
}

.dialog-overlay {
    position: fixed;
    inset: 0;
    z-index: 1000;
    background: rgba(17, 24, 39, 0.45);
    display: flex;
    align-items: flex-start;
    justify-content: center;
    padding-top: 10vh;
}

.dialog {
    width: 440px;
    max-width: 92vw;
    max-height: 75vh;
    overflow-y: auto;
    border-radius: 12px;
    border: 1px solid #d0d7de;
    background: #ffffff;
    color: #1f2328;
    box-shadow: 0 18px 48px rgba(17, 24, 39, 0.22);
    padding: 16px 18px;
    text-align: left;
}

.dialog-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 8px;
}

.dialog-title {
    margin: 0;
    font-size: 16px;
}

.dialog-close {
    border: 0;
    background: transparent;
    color: #57606a;
    font-size: 18px;
    line-height: 1;
    padding: 4px 8px;
    cursor: pointer;
}

.settings-row {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 16px;
    padding: 12px 0;
    border-bottom: 1px solid #d0d7de33;
}

.settings-row-label {
    font-size: 13px;
    font-weight: 600;
}

.settings-row-description {
    font-size: 12px;
    opacity: 0.75;
    margin-top: 2px;
}

.settings-row-control {
    display: flex;
    align-items: center;
    gap: 8px;
}

.auth-panel {
    display: flex;
    flex-direction: column;
    gap: 8px;
    min-width: 210px;
}

.auth-actions {
    display: flex;
    gap: 8px;
}

.auth-status { font-size: 12px; font-weight: 600; }
.auth-hint { font-size: 12px; opacity: 0.75; }
.auth-message { font-size: 12px; }
.auth-error { font-size: 12px; color: #cf222e; }

.toolbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 18px;
    border-bottom: 1px solid #d0d7de;
}

.toolbar-title {
    margin: 0;
    font-size: 18px;
}

.toolbar-actions {
    display: flex;
    align-items: center;
    gap: 10px;
}

.sync-status {
    display: flex;
    align-items: center;
    gap: 6px;
    font-size: 12px;
    padding: 4px 10px;
    border: 1px solid #d0d7de;
    border-radius: 999px;
}

.sync-status-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #8c959f;
}

.sync-status[data-sync='synced'] .sync-status-dot { background: #1a7f37; }
.sync-status[data-sync='syncing'] .sync-status-dot { background: #9a6700; }
.sync-status[data-sync='error'] .sync-status-dot { background: #cf222e; }

.shortcut-table {
    width: 100%;
    border-collapse: collapse;
}

.shortcut-table td {
    padding: 7px 4px;
    border-bottom: 1px solid #d0d7de33;
    font-size: 13px;
}

.shortcut-keys {
    width: 130px;
    white-space: nowrap;
}

.shortcut-keys kbd {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 12px;
    padding: 2px 6px;
    border: 1px solid #d0d7de;
    border-bottom-width: 2px;
    border-radius: 6px;
    background: #f0f1f3;
}

.home-body {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
}

.home-hint {
    text-align: center;
    opacity: 0.7;
}

.home-hint-sub {
    font-size: 13px;
}

[data-theme='dark'] .ui-button--secondary { background: #e6edf3; color: #0d1117; border-color: #e6edf3; }
[data-theme='dark'] .ui-button--outline { color: #e6edf3; border-color: #30363d; }
[data-theme='dark'] .ui-button--ghost { color: #8d96a0; }
[data-theme='dark'] .ui-input,
[data-theme='dark'] .ui-select {
    background: #161b22;
    color: #e6edf3;
    border-color: #30363d;
}
[data-theme='dark'] .dialog {
    background: #1c2128;
    color: #e6edf3;
    border-color: #30363d;
}
[data-theme='dark'] .dialog-close { color: #8d96a0; }
[data-theme='dark'] .settings-row { border-bottom-color: #30363d66; }
[data-theme='dark'] .toolbar { border-bottom-color: #30363d; }
[data-theme='dark'] .sync-status { border-color: #30363d; }
[data-theme='dark'] .auth-error { color: #f85149; }
[data-theme='dark'] .shortcut-table td { border-bottom-color: #30363d66; }
[data-theme='dark'] .shortcut-keys kbd {
    background: #161b22;
    border-color: #30363d;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Secondary => "ui-button--secondary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class_name = format!("ui-button {}", variant.class());

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

/// Modal dialog shell: overlay, titled header, close affordances. The
/// overlay click and the × button both close; clicks inside the dialog
/// do not propagate out.
#[component]
pub fn UiDialog(title: &'static str, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |event: MouseEvent| event.stop_propagation(),

                div {
                    class: "dialog-header",
                    h2 { class: "dialog-title", "{title}" }
                    button {
                        class: "dialog-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
