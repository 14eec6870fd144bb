//! Community server catalog.

use serde::{Deserialize, Serialize};

/// Catalog shipped with the application.
const BUNDLED_CATALOG: &str = include_str!("../../assets/config/servers.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    pub region: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCatalog {
    pub servers: Vec<ServerInfo>,
}

impl ServerCatalog {
    /// Loads the bundled catalog. A malformed bundle yields an empty
    /// catalog instead of a startup failure.
    pub fn bundled() -> Self {
        match serde_json::from_str(BUNDLED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to parse bundled server catalog: {e}");
                Self::default()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ServerInfo> {
        self.servers.iter().find(|server| server.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = ServerCatalog::bundled();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = ServerCatalog {
            servers: vec![
                ServerInfo {
                    id: "eu-1".to_string(),
                    name: "Europe".to_string(),
                    region: "eu".to_string(),
                    address: "eu1.streamshare.example".to_string(),
                },
                ServerInfo {
                    id: "na-1".to_string(),
                    name: "North America".to_string(),
                    region: "na".to_string(),
                    address: "na1.streamshare.example".to_string(),
                },
            ],
        };

        assert_eq!(catalog.get("na-1").map(|s| s.name.as_str()), Some("North America"));
        assert!(catalog.get("sa-1").is_none());
    }
}
