use std::path::Path;
use std::process::Command;

use crate::error::{Result, ScaffoldError};
use crate::fsutil;

/// Repository the project tree is stamped out from.
pub const DEFAULT_SEED_URL: &str = "git@github.com:maxyermayank/microservice-template.git";

/// Produces a local staging directory holding the seed project tree.
/// A failed fetch fails the whole run; there is no retry.
pub trait SeedFetcher {
    fn fetch(&self, staging: &Path) -> Result<()>;
}

/// Shallow-clones the seed repository into the staging directory.
pub struct GitSeedFetcher {
    url: String,
}

impl GitSeedFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for GitSeedFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_URL)
    }
}

impl SeedFetcher for GitSeedFetcher {
    fn fetch(&self, staging: &Path) -> Result<()> {
        let output = Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg(&self.url)
            .arg(staging)
            .output()
            .map_err(|e| ScaffoldError::io(staging, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScaffoldError::CloneFailed {
                url: self.url.clone(),
                stderr,
            });
        }
        Ok(())
    }
}

/// Copies a local directory into staging instead of cloning. Keeps pipeline
/// tests off the network.
pub struct DirSeedFetcher {
    source: std::path::PathBuf,
}

impl DirSeedFetcher {
    pub fn new(source: impl Into<std::path::PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl SeedFetcher for DirSeedFetcher {
    fn fetch(&self, staging: &Path) -> Result<()> {
        fsutil::copy_tree(&self.source, staging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dir_fetcher_copies_the_seed_tree() {
        let src = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("conf")).unwrap();
        fs::write(src.path().join("conf/seed.env"), "PORT={{portNumber}}").unwrap();
        fs::write(src.path().join("build.sbt"), "name := \"{{appName}}\"").unwrap();

        let staging = tempfile::tempdir().unwrap();
        let dest = staging.path().join("seed");
        DirSeedFetcher::new(src.path()).fetch(&dest).unwrap();

        assert!(dest.join("conf/seed.env").exists());
        assert!(dest.join("build.sbt").exists());
    }

    #[test]
    fn default_fetcher_points_at_the_seed_repository() {
        let fetcher = GitSeedFetcher::default();
        assert_eq!(fetcher.url, DEFAULT_SEED_URL);
    }
}
