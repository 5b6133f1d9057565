pub mod cli;
pub mod pipeline;
pub mod prompt;
pub mod questions;
pub mod ui;

pub use cli::Cli;
pub use pipeline::{Pipeline, RunOptions, Stage, STAGING_DIR};
pub use prompt::{DialoguerPrompt, ScriptedPrompt, UserPrompt};
