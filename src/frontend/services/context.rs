//! Session context and state management.

use dioxus::prelude::*;

use crate::backend::guard::Role;
use crate::backend::servers::ServerInfo;
use crate::backend::session::SessionConfig;

/// Shared session state provided at the application root.
///
/// Pages read and mutate the session only through this context. The
/// navigation gate never goes through here: it re-reads the persisted
/// role directly, so the two can never disagree about what is on disk.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub current_session: Signal<Option<SessionConfig>>,
    pub selected_server: Signal<Option<ServerInfo>>,
}

impl SessionState {
    /// Loads a previously saved session, if any.
    pub async fn restore(&mut self) {
        if let Some(session) = SessionConfig::load().await {
            log::info!("Restored session for {}", session.username);
            self.current_session.set(Some(session));
        }
    }

    /// Logs in with a username and role and persists the session.
    pub async fn login(&mut self, username: String, role: Role) -> Result<(), String> {
        if !SessionConfig::is_valid_username(&username) {
            return Err("Username must be 3-16 characters long and can only contain letters, numbers, and underscores".to_string());
        }

        let session = SessionConfig::new(username, role.as_str().to_string());

        if let Err(e) = session.save().await {
            return Err(format!("Failed to save session: {e}"));
        }

        self.current_session.set(Some(session));

        Ok(())
    }

    /// Logs out the current user and clears the saved session.
    pub async fn logout(&mut self) {
        self.current_session.set(None);
        self.selected_server.set(None);
        if let Err(e) = SessionConfig::delete().await {
            log::warn!("Failed to remove session file: {e}");
        }
    }

    /// Gets the current username or returns "Guest" as default.
    pub fn username(&self) -> String {
        self.current_session
            .read()
            .as_ref()
            .map_or_else(|| "Guest".to_string(), |session| session.username.clone())
    }

    pub fn select_server(&mut self, server: ServerInfo) {
        self.selected_server.set(Some(server));
    }
}
