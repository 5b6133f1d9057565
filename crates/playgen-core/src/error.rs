use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("config key '{0}' has no value")]
    MissingKey(&'static str),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: not a valid JSON document: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("git clone of '{url}' failed: {stderr}")]
    CloneFailed { url: String, stderr: String },

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("scripted prompt has no answer left for '{0}'")]
    ScriptExhausted(String),
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
