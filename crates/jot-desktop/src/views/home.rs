//! Main application view

use dioxus::prelude::*;

use crate::components::Toolbar;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column;",

            Toolbar {}

            main {
                class: "home-body",
                div {
                    class: "home-hint",
                    p { "No notes yet." }
                    p {
                        class: "home-hint-sub",
                        "Press ? for keyboard shortcuts, or open Settings to connect cloud sync."
                    }
                }
            }
        }
    }
}
