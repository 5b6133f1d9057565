use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

/// Copies every file under `src` to the corresponding relative path under
/// `dest`, byte for byte. `.git` directories are skipped so a staged clone
/// can be copied out without dragging its history along.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
    {
        let entry = entry.map_err(|e| ScaffoldError::io(src, e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::io(&target, e))?;
        }
    }
    Ok(())
}

/// Copies one file, creating parent directories as needed.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    fs::copy(src, dest).map_err(|e| ScaffoldError::io(dest, e))?;
    Ok(())
}

/// Writes `content` to `dest`, creating parent directories as needed.
pub fn write_file(dest: &Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    fs::write(dest, content).map_err(|e| ScaffoldError::io(dest, e))
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))
}
