use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Keys recognized in the persisted config document.
pub mod keys {
    pub const APP_TYPE: &str = "appType";
    pub const APP_NAME: &str = "appName";
    pub const APP_DESCRIPTION: &str = "appDescription";
    pub const APP_AUTHOR: &str = "appAuthor";
    pub const PORT_NUMBER: &str = "portNumber";
    pub const PLAY_VERSION: &str = "playVersion";
    pub const SCALA_VERSION: &str = "scalaVersion";
    pub const LANGUAGE: &str = "language";
    pub const SBT_VERSION: &str = "sbtVersion";
    pub const LANGS: &str = "langs";
    pub const GITHUB_NAME: &str = "githubName";
    pub const GITHUB_EMAIL: &str = "githubEmail";
    pub const GITHUB_NAME_AND_EMAIL: &str = "githubNameAndEmail";
}

/// Flat key/value document scoped to a destination directory.
///
/// Persisted as `.playgen.json` in the destination root so a rerun picks up
/// every previously collected answer.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    pub const FILE_NAME: &'static str = ".playgen.json";

    /// Loads the store for `dest`, or starts empty when no document exists.
    /// A present but unreadable/invalid document is an error.
    pub fn load_or_default(dest: &Path) -> Result<Self> {
        let path = dest.join(Self::FILE_NAME);
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| ScaffoldError::io(&path, e))?;
            serde_json::from_str(&content).map_err(|e| ScaffoldError::Json {
                path: path.clone(),
                source: e,
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Sets `key` only when it has no value yet. Returns whether it was set.
    /// Pre-supplied values always win over later prompt answers.
    pub fn set_if_unset(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.is_set(key) {
            return false;
        }
        self.set(key, value);
        true
    }

    pub fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(ScaffoldError::MissingKey(key))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .expect("string map always serializes");
        fs::write(&self.path, content).map_err(|e| ScaffoldError::io(&self.path, e))
    }
}
