//! Settings Repository
//!
//! Settings live in a JSON file next to the database.

use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult, Settings};

pub const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Stored settings, or defaults when nothing was saved yet
    pub async fn load(&self) -> DomainResult<Settings> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(DomainError::internal(e)),
        };
        serde_json::from_str(&text).map_err(|e| {
            DomainError::Internal(format!("Corrupt {}: {}", self.path.display(), e))
        })
    }

    pub async fn save(&self, settings: &Settings) -> DomainResult<Settings> {
        settings.validate()?;
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(DomainError::internal)?;
        }
        let text = serde_json::to_string_pretty(settings).map_err(DomainError::internal)?;
        tokio::fs::write(&self.path, text).await.map_err(DomainError::internal)?;
        Ok(settings.clone())
    }
}
