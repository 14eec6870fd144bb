//! Login page.

use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

use crate::backend::guard::Role;
use crate::backend::session::SessionConfig;
use crate::frontend::services::SessionState;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut session = use_context::<SessionState>();
    let mut username = use_signal(String::new);
    let mut role_choice = use_signal(|| Role::Ami);
    let mut error = use_signal(String::new);

    // Validation function for the username
    let is_valid = move || SessionConfig::is_valid_username(&username.read());

    let submit = move || {
        if !is_valid() {
            error.set(
                "Username must be 3-16 characters long and can only contain letters, numbers, and underscores"
                    .to_string(),
            );
            return;
        }
        let name = username();
        let role = role_choice();
        spawn(async move {
            match session.login(name, role).await {
                Ok(()) => {
                    nav.push("/select-server");
                }
                Err(e) => error.set(e),
            }
        });
    };
    let mut submit_on_key = submit.clone();
    let mut submit_on_click = submit;

    rsx! {
        main { class: "login-screen",
            div { class: "login-card",
                h1 { class: "welcome-text", "Welcome to StreamShare!" }
                p { class: "login-subtitle", "Sign in to pick a server and share your clips." }

                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    oninput: move |e| username.set(e.value()),
                    onkeypress: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit_on_key();
                        }
                    },
                    placeholder: "Username",
                    autofocus: true
                }

                div { class: "role-options",
                    button {
                        class: if role_choice() == Role::Streamer { "role-button selected" } else { "role-button" },
                        onclick: move |_| role_choice.set(Role::Streamer),
                        "Streamer"
                    }
                    button {
                        class: if role_choice() == Role::Ami { "role-button selected" } else { "role-button" },
                        onclick: move |_| role_choice.set(Role::Ami),
                        "Friend"
                    }
                }

                button {
                    class: "primary-button",
                    onclick: move |_| submit_on_click(),
                    "Sign in"
                }

                if !error().is_empty() {
                    div { class: "error-message", "{error}" }
                } else {
                    div { class: "error-message-placeholder" }
                }
            }
        }
    }
}
