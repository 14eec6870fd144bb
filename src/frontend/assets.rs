//! Embedded static resources.

/// Stylesheet injected by the route gate, ahead of every page.
pub fn app_css() -> &'static str {
    include_str!("../../assets/styles/main.css")
}
