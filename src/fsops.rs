//! Guarded filesystem mutations. Every helper narrates the action it is
//! about to take and, under dry run, stops at the narration.

use crate::errors::{FileOperation, IoError};
use crate::utils::display_path;
use colored::{ColoredString, Colorize};
use std::fs;
use std::path::Path;

fn announce(verb: ColoredString, target: String) {
    println!("   {} {}", verb, target);
}

/// Recursively deletes the directory at `path`.
pub fn remove_dir_all(root: &Path, path: &Path, dry_run: bool) -> Result<(), IoError> {
    let verb = if dry_run { "would remove" } else { "remove" };
    announce(verb.red(), display_path(root, path));

    if dry_run {
        return Ok(());
    }

    fs::remove_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Remove, path.into(), error))
}

/// Renames a file or directory in place.
pub fn rename(root: &Path, from: &Path, to: &Path, dry_run: bool) -> Result<(), IoError> {
    let verb = if dry_run { "would rename" } else { "rename" };
    announce(
        verb.yellow(),
        format!("{} -> {}", display_path(root, from), display_path(root, to)),
    );

    if dry_run {
        return Ok(());
    }

    fs::rename(from, to).map_err(|error| IoError::new(FileOperation::Rename, from.into(), error))
}

/// Moves a file to a new location within the same tree.
pub fn move_file(root: &Path, from: &Path, to: &Path, dry_run: bool) -> Result<(), IoError> {
    let verb = if dry_run { "would move" } else { "move" };
    announce(
        verb.blue(),
        format!("{} -> {}", display_path(root, from), display_path(root, to)),
    );

    if dry_run {
        return Ok(());
    }

    fs::rename(from, to).map_err(|error| IoError::new(FileOperation::Move, from.into(), error))
}

/// Creates the directory at `path`, intermediate parents included.
pub fn create_dir_all(root: &Path, path: &Path, dry_run: bool) -> Result<(), IoError> {
    let verb = if dry_run { "would create" } else { "create" };
    announce(verb.green(), display_path(root, path));

    if dry_run {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}

/// Writes `contents` to `path` and marks the file executable.
pub fn write_executable(
    root: &Path,
    path: &Path,
    contents: &str,
    dry_run: bool,
) -> Result<(), IoError> {
    let verb = if dry_run { "would create" } else { "create" };
    announce(verb.green(), display_path(root, path));

    if dry_run {
        return Ok(());
    }

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .map_err(|error| IoError::new(FileOperation::Chmod, path.into(), error))?;
    }

    Ok(())
}
