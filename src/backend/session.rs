//! Persisted login session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::backend::guard::RoleProvider;
use crate::backend::paths::get_data_dir;
use crate::utils::Result;

/// Session document written at login and removed at logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub username: String,
    pub role: String,
}

impl SessionConfig {
    /// Creates a new session with the given username and role string.
    pub fn new(username: String, role: String) -> Self {
        Self { username, role }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Gets the path to the session file.
    pub fn session_path() -> PathBuf {
        get_data_dir()
            .unwrap_or_else(|_| PathBuf::from("StreamShare"))
            .join("session.json")
    }

    /// Saves the session to its default location.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::session_path()).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;

        Ok(())
    }

    /// Loads the session from its default location. A missing or
    /// unreadable file is the logged-out state, not an error.
    pub async fn load() -> Option<Self> {
        Self::load_from(&Self::session_path()).await
    }

    pub async fn load_from(path: &Path) -> Option<Self> {
        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str(&json).ok(),
            Err(_) => None,
        }
    }

    /// Deletes the session file, if any.
    pub async fn delete() -> Result<()> {
        let path = Self::session_path();
        if path.exists() {
            fs::remove_file(path).await?;
        }
        Ok(())
    }
}

/// Gate-facing view of the stored session.
///
/// Re-reads the session file on every call, so a role written or cleared
/// between navigations is seen by the very next evaluation.
#[derive(Clone)]
pub struct StoredRoles {
    path: PathBuf,
}

impl StoredRoles {
    pub fn new() -> Self {
        Self {
            path: SessionConfig::session_path(),
        }
    }

    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for StoredRoles {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProvider for StoredRoles {
    fn role(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let session: SessionConfig = serde_json::from_str(&raw).ok()?;
        Some(session.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::guard::{Decision, LOGIN_PATH, NavigationGate};
    use tempfile::TempDir;

    #[test]
    fn test_username_validation() {
        assert!(SessionConfig::is_valid_username("abc"));
        assert!(SessionConfig::is_valid_username("Stream_Fan_42"));
        assert!(!SessionConfig::is_valid_username("ab"));
        assert!(!SessionConfig::is_valid_username("seventeen_chars__"));
        assert!(!SessionConfig::is_valid_username("with space"));
        assert!(!SessionConfig::is_valid_username("accenté"));
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let session = SessionConfig::new("marie".to_string(), "streamer".to_string());
        session.save_to(&path).await.unwrap();

        let loaded = SessionConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn test_missing_session_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert!(SessionConfig::load_from(&dir.path().join("session.json")).await.is_none());
    }

    #[test]
    fn test_stored_roles_reads_current_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let roles = StoredRoles::from_path(path.clone());

        assert_eq!(roles.role(), None);

        std::fs::write(&path, r#"{"username":"paul","role":"ami"}"#).unwrap();
        assert_eq!(roles.role(), Some("ami".to_string()));

        // The provider must not cache: an updated file wins immediately.
        std::fs::write(&path, r#"{"username":"paul","role":"admin"}"#).unwrap();
        assert_eq!(roles.role(), Some("admin".to_string()));

        std::fs::remove_file(&path).unwrap();
        assert_eq!(roles.role(), None);
    }

    #[test]
    fn test_garbage_session_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let roles = StoredRoles::from_path(path);
        assert_eq!(roles.role(), None);
    }

    #[test]
    fn test_gate_follows_the_session_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let gate = NavigationGate::new(StoredRoles::from_path(path.clone()));

        assert_eq!(gate.evaluate("/upload"), Decision::Redirect(LOGIN_PATH));

        std::fs::write(&path, r#"{"username":"paul","role":"streamer"}"#).unwrap();
        assert_eq!(gate.evaluate("/upload"), Decision::Allow);

        std::fs::write(&path, r#"{"username":"paul","role":"viewer"}"#).unwrap();
        assert_eq!(gate.evaluate("/upload"), Decision::Redirect(LOGIN_PATH));
    }
}
