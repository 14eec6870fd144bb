use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

use crate::frontend::app::Route;
use crate::frontend::services::SessionState;

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = use_context::<SessionState>();
    let username = session.username();

    let active_tab = match route {
        Route::SelectServer {} => "Servers",
        Route::Upload {} => "Upload",
        Route::ListFriends {} => "Friends",
        _ => "",
    };

    rsx! {
        nav { class: "navigation",
            span { class: "nav-brand", "StreamShare" }
            ul { class: "nav-items",
                li {
                    class: if active_tab == "Servers" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/select-server"); },
                    span { class: "nav-text", "Servers" }
                }
                li {
                    class: if active_tab == "Upload" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/upload"); },
                    span { class: "nav-text", "Upload" }
                }
                li {
                    class: if active_tab == "Friends" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/list-friends"); },
                    span { class: "nav-text", "Friends" }
                }
            }
            div { class: "nav-user",
                span { class: "nav-username", "{username}" }
                button {
                    class: "logout-button",
                    onclick: {
                        let mut session = session;
                        move |_| {
                            spawn(async move {
                                session.logout().await;
                                nav.push("/login");
                            });
                        }
                    },
                    "Log out"
                }
            }
        }
    }
}
