mod backend;
mod frontend;
mod utils;

use std::sync::OnceLock;

use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use tokio::runtime::Runtime;

use crate::backend::guard::NavigationGate;
use crate::backend::session::StoredRoles;
use crate::frontend::app::Route;
use crate::frontend::services::SessionState;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    // Logging setup
    env_logger::init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1120.0, 760.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("StreamShare")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let current_session = use_signal(|| None);
    let selected_server = use_signal(|| None);
    let mut session = SessionState {
        current_session,
        selected_server,
    };
    provide_context(session);
    provide_context(NavigationGate::new(StoredRoles::new()));

    // Restore a saved session once at startup
    use_future(move || async move {
        session.restore().await;
    });

    rsx! { Router::<Route> {} }
}
