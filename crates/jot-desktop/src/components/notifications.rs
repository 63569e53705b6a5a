//! Toast notification host and the handle consumers use to raise toasts.
//!
//! The layout math lives in `jot_core::notify`; this module renders the
//! stack and drives the timer-based lifecycle: entrance transition after
//! a short delay, auto-dismiss after the per-kind duration, and removal
//! once the exit transition has run.

use std::time::Duration;

use dioxus::prelude::*;

use jot_core::notify::{
    Notification, NotificationCenter, NotificationId, NotificationKind, ShowOptions, ToastLayout,
    ENTER_DELAY, EXIT_DURATION,
};

use crate::state::AppState;

/// How often the host re-checks the window width for the breakpoint.
const VIEWPORT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Width assumed until the window has been measured once.
const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

pub const NOTIFICATION_STYLES: &str = r"
.toast-region {
    position: fixed;
    inset: 0;
    z-index: 9999;
    pointer-events: none;
}
.toast {
    pointer-events: auto;
    position: fixed;
    right: 20px;
    width: 360px;
    max-width: calc(100vw - 24px);
    border-radius: 10px;
    border: 1px solid #d0d7de;
    border-left-width: 4px;
    background: #ffffff;
    color: #1f2328;
    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    padding: 12px 14px;
    display: flex;
    gap: 10px;
    align-items: flex-start;
    opacity: 0;
    transform: translateX(16px);
    transition: top 200ms ease, opacity 250ms ease, transform 250ms ease;
    cursor: pointer;
}
.toast[data-kind='success'] { border-left-color: #1a7f37; }
.toast[data-kind='error'] { border-left-color: #cf222e; }
.toast[data-kind='warning'] { border-left-color: #9a6700; }
.toast[data-kind='info'] { border-left-color: #0969da; }
.toast--visible {
    opacity: 1;
    transform: none;
}
.toast--leaving {
    opacity: 0;
    transform: translateX(16px);
}
.toast-message {
    flex: 1;
    font-size: 13px;
    line-height: 1.45;
}
.toast-close {
    border: 0;
    background: transparent;
    color: #6e7681;
    font-size: 16px;
    line-height: 1;
    padding: 0;
    cursor: pointer;
}
.toast-region--mobile .toast {
    left: 12px;
    right: 12px;
    width: auto;
    max-width: none;
}
[data-theme='dark'] .toast {
    background: #1c2128;
    color: #e6edf3;
    border-color: #30363d;
}
[data-theme='dark'] .toast[data-kind='success'] { border-left-color: #3fb950; }
[data-theme='dark'] .toast[data-kind='error'] { border-left-color: #f85149; }
[data-theme='dark'] .toast[data-kind='warning'] { border-left-color: #d29922; }
[data-theme='dark'] .toast[data-kind='info'] { border-left-color: #58a6ff; }
[data-theme='dark'] .toast-close { color: #8d96a0; }
";

/// Signal-backed handle over the notification queue. `Copy`, so
/// consumers capture it in event handlers and spawned tasks freely; this
/// is the only notification contract other components depend on.
#[derive(Clone, Copy)]
pub struct Notifications {
    center: Signal<NotificationCenter>,
}

impl Notifications {
    #[must_use]
    pub fn new(center: Signal<NotificationCenter>) -> Self {
        Self { center }
    }

    /// Shows a notification and schedules its lifecycle timers.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        options: ShowOptions,
    ) -> NotificationId {
        let id = self.center.write().show(message, kind, options);

        let mut center = self.center;
        spawn(async move {
            tokio::time::sleep(ENTER_DELAY).await;
            center.write().mark_entered(id);
        });

        if options.auto_hide {
            let duration = options.duration.unwrap_or_else(|| kind.default_duration());
            let mut handle = *self;
            spawn(async move {
                tokio::time::sleep(duration).await;
                // Races harmlessly with a manual dismiss; the center
                // treats the second begin_dismiss as a no-op.
                handle.dismiss(id);
            });
        }

        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationKind::Success, ShowOptions::default())
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationKind::Error, ShowOptions::default())
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationKind::Warning, ShowOptions::default())
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationKind::Info, ShowOptions::default())
    }

    /// Starts the exit transition and schedules the unmount. Safe to call
    /// repeatedly or with a stale id.
    pub fn dismiss(&mut self, id: NotificationId) {
        if self.center.write().begin_dismiss(id) {
            let mut center = self.center;
            spawn(async move {
                tokio::time::sleep(EXIT_DURATION).await;
                center.write().remove(id);
            });
        }
    }

    /// Dismisses every mounted notification.
    pub fn dismiss_all(&mut self) {
        let ids = self.center.read().ids();
        for id in ids {
            self.dismiss(id);
        }
    }

    pub fn set_height(&mut self, id: NotificationId, height: f64) {
        self.center.write().set_height(id, height);
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.center.read().has_active()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.center.read().entries().to_vec()
    }
}

/// Renders the toast stack. Mount once near the root, above the app
/// content.
#[component]
pub fn NotificationHost() -> Element {
    let state = use_context::<AppState>();
    let notifications = state.notifications;
    let mut viewport_width = use_signal(|| DEFAULT_VIEWPORT_WIDTH);

    // Track the window width for the mobile/desktop breakpoint. No resize
    // event reaches us through the desktop webview, so poll cheaply.
    use_future(move || async move {
        loop {
            let window = dioxus::desktop::window();
            let scale = window.scale_factor();
            let width = f64::from(window.inner_size().width) / scale;
            if (viewport_width() - width).abs() > 0.5 {
                viewport_width.set(width);
            }
            tokio::time::sleep(VIEWPORT_POLL_INTERVAL).await;
        }
    });

    let layout = ToastLayout::for_viewport_width(viewport_width());
    let region_class = if layout.mobile {
        "toast-region toast-region--mobile"
    } else {
        "toast-region"
    };

    rsx! {
        div {
            class: "{region_class}",
            for entry in notifications.entries() {
                ToastView { key: "{entry.id}", entry }
            }
        }
    }
}

#[component]
fn ToastView(entry: Notification) -> Element {
    let state = use_context::<AppState>();
    let mut notifications = state.notifications;
    let id = entry.id;
    let click_to_dismiss = entry.click_to_dismiss;

    let mut class = String::from("toast");
    if entry.entered && !entry.dismissing {
        class.push_str(" toast--visible");
    }
    if entry.dismissing {
        class.push_str(" toast--leaving");
    }

    rsx! {
        div {
            class: "{class}",
            "data-kind": entry.kind.as_str(),
            style: "top: {entry.top_offset}px;",
            role: "status",
            onclick: move |_| {
                if click_to_dismiss {
                    notifications.dismiss(id);
                }
            },
            onmounted: move |event: Event<MountedData>| {
                spawn(async move {
                    match event.data().get_client_rect().await {
                        Ok(rect) => notifications.set_height(id, rect.size.height),
                        Err(error) => {
                            tracing::debug!("Failed to measure toast {id}: {error}");
                        }
                    }
                });
            },

            div {
                class: "toast-message",
                "{entry.message}"
            }
            button {
                class: "toast-close",
                aria_label: "Dismiss notification",
                onclick: move |event: MouseEvent| {
                    event.stop_propagation();
                    notifications.dismiss(id);
                },
                "×"
            }
        }
    }
}
