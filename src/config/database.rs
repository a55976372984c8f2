use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file.
    pub path: PathBuf,
    /// Turn on SQLite foreign key enforcement. Off by default so deletes
    /// leave dependent rows pointing at the removed id.
    pub foreign_keys: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/roster.db"),
            foreign_keys: false,
        }
    }
}
