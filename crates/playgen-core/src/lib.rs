pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod fsutil;
pub mod identity;
pub mod materializer;
pub mod template;

pub use config::{keys, ConfigStore};
pub use context::TemplateContext;
pub use error::{Result, ScaffoldError};
pub use fetch::{DirSeedFetcher, GitSeedFetcher, SeedFetcher, DEFAULT_SEED_URL};
pub use identity::{GitIdentity, Identity, IdentitySource};
pub use materializer::{Materializer, Report};
