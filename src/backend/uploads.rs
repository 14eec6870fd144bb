//! Local upload manifest.
//!
//! There is no transfer backend; recording a clip in the manifest is the
//! entire upload side effect. The manifest lives next to the session file
//! in the application data directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::paths::get_data_dir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Server chosen when the clip was sent, if any.
    pub server_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UploadData {
    uploads: Vec<UploadRecord>,
}

pub struct UploadLog {
    data: Arc<Mutex<UploadData>>,
    manifest_path: PathBuf,
}

impl UploadLog {
    pub fn new() -> Self {
        let manifest_path = get_data_dir()
            .unwrap_or_else(|_| PathBuf::from("StreamShare"))
            .join("uploads.json");
        Self::with_path(manifest_path)
    }

    pub fn with_path(manifest_path: PathBuf) -> Self {
        let data = Self::load_data(&manifest_path);
        Self {
            data: Arc::new(Mutex::new(data)),
            manifest_path,
        }
    }

    fn load_data(path: &Path) -> UploadData {
        if path.exists()
            && let Ok(content) = std::fs::read_to_string(path)
            && let Ok(data) = serde_json::from_str(&content)
        {
            return data;
        }

        UploadData::default()
    }

    fn save_data(&self) {
        if let Ok(data) = self.data.lock()
            && let Ok(json) = serde_json::to_string_pretty(&*data)
        {
            if let Some(parent) = self.manifest_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = std::fs::write(&self.manifest_path, json) {
                log::warn!("Failed to write upload manifest: {e}");
            }
        }
    }

    /// Appends a record and persists the manifest.
    pub fn record(&self, file_name: String, size_bytes: u64, server_id: Option<String>) {
        if let Ok(mut data) = self.data.lock() {
            data.uploads.push(UploadRecord {
                file_name,
                size_bytes,
                uploaded_at: Utc::now(),
                server_id,
            });
            drop(data);
            self.save_data();
        }
    }

    /// Recorded uploads, newest first.
    pub fn entries(&self) -> Vec<UploadRecord> {
        if let Ok(data) = self.data.lock() {
            let mut uploads = data.uploads.clone();
            uploads.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
            uploads
        } else {
            Vec::new()
        }
    }

    pub fn format_size(size_bytes: u64) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * KIB;
        const GIB: u64 = 1024 * MIB;

        match size_bytes {
            0..KIB => format!("{size_bytes} B"),
            KIB..MIB => format!("{:.1} KB", size_bytes as f64 / KIB as f64),
            MIB..GIB => format!("{:.1} MB", size_bytes as f64 / MIB as f64),
            _ => format!("{:.2} GB", size_bytes as f64 / GIB as f64),
        }
    }
}

impl Default for UploadLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uploads.json");

        let log = UploadLog::with_path(path.clone());
        log.record("clip.mp4".to_string(), 2048, Some("eu-1".to_string()));
        log.record("intro.mov".to_string(), 512, None);

        let reloaded = UploadLog::with_path(path);
        let entries = reloaded.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name, "intro.mov");
        assert_eq!(entries[1].server_id.as_deref(), Some("eu-1"));
    }

    #[test]
    fn test_entries_are_newest_first() {
        let dir = TempDir::new().unwrap();
        let log = UploadLog::with_path(dir.path().join("uploads.json"));

        log.record("first.mp4".to_string(), 1, None);
        std::thread::sleep(std::time::Duration::from_millis(5));
        log.record("second.mp4".to_string(), 1, None);

        let names: Vec<String> = log.entries().into_iter().map(|u| u.file_name).collect();
        assert_eq!(names, ["second.mp4", "first.mp4"]);
    }

    #[test]
    fn test_missing_manifest_starts_empty() {
        let dir = TempDir::new().unwrap();
        let log = UploadLog::with_path(dir.path().join("uploads.json"));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_size_formatting() {
        assert_eq!(UploadLog::format_size(512), "512 B");
        assert_eq!(UploadLog::format_size(2048), "2.0 KB");
        assert_eq!(UploadLog::format_size(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(UploadLog::format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }
}
