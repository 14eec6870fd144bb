//! Application routing system.

use dioxus::prelude::*;
use dioxus_router::{Routable, components::Outlet, navigator, use_route};

use crate::backend::guard::{Decision, NavigationGate};
use crate::backend::session::StoredRoles;
use crate::frontend::assets;
use crate::frontend::components::Navigation;
use crate::frontend::pages::{ListFriends, Login, NotFound, SelectServer, Upload};

/// Main routing enum for the application.
///
/// Every route sits behind the [`Gate`] layout, so each navigation is
/// evaluated before its destination mounts. `/` always rewrites to the
/// login page before gate policy applies.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    #[layout(Gate)]
        /// Login page, also the target of every denied navigation.
        #[redirect("/", || Route::Login {})]
        #[route("/login")]
        Login {},
        #[layout(Shell)]
            /// Community server picker.
            #[route("/select-server")]
            SelectServer {},
            /// Clip upload page. The only gated destination.
            #[route("/upload")]
            Upload {},
            /// Community roster.
            #[route("/list-friends")]
            ListFriends {},
        #[end_layout]
        /// Catch-all for paths outside the route table.
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Pre-navigation authorization layout.
///
/// Runs on every route change. A denied attempt replaces the navigation
/// with the login page and renders nothing, so a blocked destination
/// never mounts, even momentarily.
#[component]
pub fn Gate() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();
    let gate = use_context::<NavigationGate<StoredRoles>>();

    match gate.evaluate(&route.to_string()) {
        Decision::Allow => rsx! {
            style { dangerous_inner_html: assets::app_css() }
            Outlet::<Route> {}
        },
        Decision::Redirect(target) => {
            nav.replace(target);
            rsx! {}
        }
    }
}

/// Post-login chrome: navigation tabs around the routed page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navigation {}
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_routes_render_their_paths() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::SelectServer {}.to_string(), "/select-server");
        assert_eq!(Route::Upload {}.to_string(), "/upload");
        assert_eq!(Route::ListFriends {}.to_string(), "/list-friends");
    }

    #[test]
    fn test_root_rewrites_to_login() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Login {});
    }

    #[test]
    fn test_documented_paths_resolve() {
        assert_eq!(Route::from_str("/login").unwrap(), Route::Login {});
        assert_eq!(Route::from_str("/select-server").unwrap(), Route::SelectServer {});
        assert_eq!(Route::from_str("/upload").unwrap(), Route::Upload {});
        assert_eq!(Route::from_str("/list-friends").unwrap(), Route::ListFriends {});
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        match Route::from_str("/does/not/exist").unwrap() {
            Route::NotFound { segments } => assert_eq!(segments, ["does", "not", "exist"]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
