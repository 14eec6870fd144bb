//! Server selection page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::backend::servers::ServerCatalog;
use crate::frontend::services::SessionState;

#[component]
pub fn SelectServer() -> Element {
    let nav = use_navigator();
    let mut session = use_context::<SessionState>();
    let catalog = use_signal(ServerCatalog::bundled);

    let selected_id = session
        .selected_server
        .read()
        .as_ref()
        .map(|server| server.id.clone());

    rsx! {
        div { class: "page select-server",
            h1 { class: "page-title", "Pick a server" }
            p { class: "page-subtitle", "Your clips will be shared with the community on this server." }

            div { class: "server-list",
                for server in catalog().servers {
                    div {
                        key: "{server.id}",
                        class: if selected_id.as_deref() == Some(server.id.as_str()) { "server-card selected" } else { "server-card" },
                        onclick: {
                            let server = server.clone();
                            move |_| session.select_server(server.clone())
                        },
                        div { class: "server-name", "{server.name}" }
                        div { class: "server-region", "{server.region}" }
                        div { class: "server-address", "{server.address}" }
                    }
                }
            }

            button {
                class: "primary-button",
                disabled: selected_id.is_none(),
                onclick: move |_| {
                    nav.push("/upload");
                },
                "Continue to upload"
            }
        }
    }
}
