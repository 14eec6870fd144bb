//! Community roster page.

use dioxus::prelude::*;

use crate::backend::friends::FriendRoster;

#[component]
pub fn ListFriends() -> Element {
    let roster = use_signal(FriendRoster::bundled);

    rsx! {
        div { class: "page list-friends",
            h1 { class: "page-title", "Friends" }

            div { class: "friend-list",
                for friend in roster().sorted() {
                    div {
                        key: "{friend.username}",
                        class: "friend-row",
                        span { class: "friend-name", "{friend.username}" }
                        span {
                            class: if friend.role == "streamer" { "role-badge streamer" } else { "role-badge" },
                            "{friend.role}"
                        }
                        span { class: "friend-seen",
                            {FriendRoster::format_last_seen(friend.last_seen)}
                        }
                    }
                }
            }
        }
    }
}
