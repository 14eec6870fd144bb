//! Fallback page for paths outside the route table.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        div { class: "page not-found",
            div { class: "not-found-code", "404" }
            h1 { class: "page-title", "Page not found" }
            p { class: "not-found-path", "No destination matches /{path}" }
            button {
                class: "primary-button",
                onclick: move |_| {
                    nav.push("/login");
                },
                "Back to login"
            }
        }
    }
}
