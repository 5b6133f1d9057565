use serde::Serialize;

use crate::config::{keys, ConfigStore};
use crate::error::Result;

/// Read-only snapshot of the config values consumed by template files.
///
/// Assembled once before materialization begins; holds exactly the nine
/// keys that seed templates reference.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub app_name: String,
    pub app_description: String,
    pub app_author: String,
    pub port_number: String,
    pub play_version: String,
    pub scala_version: String,
    pub language: String,
    pub sbt_version: String,
    pub langs: String,
}

impl TemplateContext {
    /// Builds the snapshot from a fully collected store. Any missing key is
    /// an error rather than an empty substitution.
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        Ok(Self {
            app_name: store.require(keys::APP_NAME)?.to_string(),
            app_description: store.require(keys::APP_DESCRIPTION)?.to_string(),
            app_author: store.require(keys::APP_AUTHOR)?.to_string(),
            port_number: store.require(keys::PORT_NUMBER)?.to_string(),
            play_version: store.require(keys::PLAY_VERSION)?.to_string(),
            scala_version: store.require(keys::SCALA_VERSION)?.to_string(),
            language: store.require(keys::LANGUAGE)?.to_string(),
            sbt_version: store.require(keys::SBT_VERSION)?.to_string(),
            langs: store.require(keys::LANGS)?.to_string(),
        })
    }

    /// Looks a placeholder name up by its template spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            keys::APP_NAME => Some(&self.app_name),
            keys::APP_DESCRIPTION => Some(&self.app_description),
            keys::APP_AUTHOR => Some(&self.app_author),
            keys::PORT_NUMBER => Some(&self.port_number),
            keys::PLAY_VERSION => Some(&self.play_version),
            keys::SCALA_VERSION => Some(&self.scala_version),
            keys::LANGUAGE => Some(&self.language),
            keys::SBT_VERSION => Some(&self.sbt_version),
            keys::LANGS => Some(&self.langs),
            _ => None,
        }
    }

    /// The app name with hyphens replaced by underscores, as used for the
    /// integration-test artifact name.
    pub fn app_name_underscored(&self) -> String {
        self.app_name.replace('-', "_")
    }
}
